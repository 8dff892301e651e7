//! VFS 错误类型
//!
//! 只读伪文件系统能产生的错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。
//! 枚举结束不是错误，由 [`crate::Inode::readdir_at`] 返回 `Ok(None)` 表示。

use core::fmt;

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// 文件不存在 (-ENOENT)
    NotFound,
    /// 不是目录 (-ENOTDIR)
    NotDirectory,
    /// 是目录 (-EISDIR)
    IsDirectory,
    /// 只读文件系统 (-EROFS)
    ReadOnlyFs,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::NotDirectory => -20,
            FsError::IsDirectory => -21,
            FsError::ReadOnlyFs => -30,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FsError::NotFound => "no such file or directory",
            FsError::NotDirectory => "not a directory",
            FsError::IsDirectory => "is a directory",
            FsError::ReadOnlyFs => "read-only file system",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for FsError {}
