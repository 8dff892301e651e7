//! 文件系统抽象

use alloc::sync::Arc;

use crate::{FsError, Inode};

/// 文件系统 trait
///
/// 所有可挂载的文件系统实现都必须实现此 trait。
pub trait FileSystem: Send + Sync {
    /// 文件系统类型名称（如 `"proc"`）
    fn fs_type(&self) -> &'static str;

    /// 获取根 inode
    ///
    /// 合成式文件系统可以在每次调用时构造一个新的根节点，
    /// 调用方不应依赖两次调用返回同一个对象。
    fn root_inode(&self) -> Arc<dyn Inode>;

    /// 同步文件系统；没有后备存储的文件系统直接返回 `Ok(())`
    fn sync(&self) -> Result<(), FsError>;

    /// 获取文件系统统计信息
    fn statfs(&self) -> Result<StatFs, FsError>;
}

/// 文件系统统计信息
///
/// 伪文件系统不占用存储空间，`total_blocks` 为 0。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFs {
    /// 块大小（单位：字节）
    pub block_size: usize,
    /// 总块数
    pub total_blocks: usize,
    /// 最大文件名长度
    pub max_filename_len: usize,
}
