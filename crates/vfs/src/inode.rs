//! Inode 抽象层 - VFS 存储层接口
//!
//! 该模块定义了文件系统的底层节点接口，提供无状态的文件和目录访问能力。
//!
//! 与持久化文件系统不同，伪文件系统的节点可以在每次查找时临时合成，
//! 因此目录枚举采用“按索引逐项获取”的协议（[`Inode::readdir_at`]），
//! 调用方每次只取一项，不要求两次调用之间看到同一份底层状态。

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;

use crate::FsError;

/// 文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeType {
    /// 普通文件
    File,
    /// 目录
    Directory,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// 文件权限和类型（与 POSIX 兼容）
    pub struct FileMode: u32 {
        // 文件类型掩码
        /// 文件类型掩码
        const S_IFMT   = 0o170000;
        /// 普通文件
        const S_IFREG  = 0o100000;
        /// 目录
        const S_IFDIR  = 0o040000;

        // 用户权限
        /// 用户读
        const S_IRUSR  = 0o400;
        /// 用户写
        const S_IWUSR  = 0o200;
        /// 用户执行
        const S_IXUSR  = 0o100;

        // 组权限
        /// 组读
        const S_IRGRP  = 0o040;
        /// 组写
        const S_IWGRP  = 0o020;
        /// 组执行
        const S_IXGRP  = 0o010;

        // 其他用户权限
        /// 其他读
        const S_IROTH  = 0o004;
        /// 其他写
        const S_IWOTH  = 0o002;
        /// 其他执行
        const S_IXOTH  = 0o001;
    }
}

impl FileMode {
    /// 检查是否有读权限（暂时只检查用户权限）
    pub fn can_read(&self) -> bool {
        self.contains(FileMode::S_IRUSR)
    }

    /// 检查是否有写权限（任意一类用户可写即视为可写）
    pub fn can_write(&self) -> bool {
        self.intersects(FileMode::S_IWUSR | FileMode::S_IWGRP | FileMode::S_IWOTH)
    }

    /// 检查是否有执行权限
    pub fn can_execute(&self) -> bool {
        self.contains(FileMode::S_IXUSR)
    }

    /// 权限位（去掉类型位）
    pub fn permissions(&self) -> u32 {
        self.bits() & 0o7777
    }
}

/// 轻量级目录项（readdir 返回）
///
/// 只描述子项，不实例化子节点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// 文件名
    pub name: String,
    /// Inode 编号
    ///
    /// 伪文件系统允许使用负数作为静态条目的哨兵编号。
    pub inode_no: i64,
    /// 文件类型
    pub inode_type: InodeType,
}

/// 文件元数据
#[derive(Debug, Clone)]
pub struct InodeMetadata {
    /// Inode 编号
    pub inode_no: i64,
    /// 文件类型
    pub inode_type: InodeType,
    /// 权限位
    pub mode: FileMode,
    /// 用户 ID
    pub uid: u32,
    /// 组 ID
    pub gid: u32,
    /// 文件大小（字节），内容动态生成的文件为 0
    pub size: usize,
    /// 硬链接数
    pub nlinks: usize,
}

/// 文件系统底层节点接口
pub trait Inode: Send + Sync + Any {
    /// 节点的显示名称
    fn name(&self) -> &str;

    /// 获取文件元数据
    fn metadata(&self) -> Result<InodeMetadata, FsError>;

    /// 从指定偏移量读取数据
    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError>;

    /// 向指定偏移量写入数据
    fn write_at(&self, _offset: usize, _buf: &[u8]) -> Result<usize, FsError> {
        Err(FsError::ReadOnlyFs)
    }

    /// 在目录中查找子项
    fn lookup(&self, name: &str) -> Result<Arc<dyn Inode>, FsError>;

    /// 获取目录中第 `index` 个子项
    ///
    /// 返回 `Ok(None)` 表示枚举结束，这不是错误。
    fn readdir_at(&self, index: usize) -> Result<Option<DirEntry>, FsError>;

    /// 列出目录内容
    ///
    /// 逐项调用 [`Inode::readdir_at`] 直到枚举结束。
    /// 对于内容随时变化的目录，结果只是“尽力而为”的视图。
    fn readdir(&self) -> Result<Vec<DirEntry>, FsError> {
        let mut entries = Vec::new();
        let mut index = 0;
        while let Some(entry) = self.readdir_at(index)? {
            entries.push(entry);
            index += 1;
        }
        log::trace!("vfs: readdir({}) -> {} entries", self.name(), entries.len());
        Ok(entries)
    }

    /// 向下转型为 &dyn Any，用于支持 downcast
    fn as_any(&self) -> &dyn Any;
}

/// 为 `dyn Inode` 提供向下转型辅助方法
impl dyn Inode {
    /// 尝试获取具体类型的引用
    pub fn downcast_ref<T: Inode>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// 按 `offset` 截取 `data` 并复制到 `buf`
///
/// `offset` 超出数据长度时返回 0；否则复制 `min(buf.len(), data.len() - offset)` 字节。
pub fn read_window(data: &[u8], offset: usize, buf: &mut [u8]) -> usize {
    if offset >= data.len() {
        return 0;
    }
    let to_read = (data.len() - offset).min(buf.len());
    buf[..to_read].copy_from_slice(&data[offset..offset + to_read]);
    to_read
}
