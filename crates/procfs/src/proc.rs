//! Procfs 文件系统实现

use alloc::sync::Arc;

use crate::inode::ProcInode;
use crate::ops::{ProcOps, proc_ops};
use vfs::{FileSystem, FsError, Inode, StatFs};

/// 根目录的默认名称（约定挂载在 `/proc`）
pub const PROC_ROOT_NAME: &str = "proc";

/// ProcFS 文件系统对象（提供 `/proc` 目录树）。
///
/// 本身不保存任何节点，只持有外部状态的访问入口；
/// 每次 [`FileSystem::root_inode`] 都返回一个新合成的根节点。
pub struct ProcFS {
    ops: &'static dyn ProcOps,
}

impl ProcFS {
    /// 使用已注册的 [`ProcOps`] 创建 ProcFS 实例
    pub fn new() -> Arc<Self> {
        Self::with_ops(proc_ops())
    }

    /// 使用指定的 [`ProcOps`] 创建 ProcFS 实例
    pub fn with_ops(ops: &'static dyn ProcOps) -> Arc<Self> {
        log::info!("procfs: created");
        Arc::new(Self { ops })
    }
}

impl FileSystem for ProcFS {
    fn fs_type(&self) -> &'static str {
        "proc"
    }

    fn root_inode(&self) -> Arc<dyn Inode> {
        ProcInode::new_root(PROC_ROOT_NAME, self.ops)
    }

    fn sync(&self) -> Result<(), FsError> {
        Ok(())
    }

    fn statfs(&self) -> Result<StatFs, FsError> {
        Ok(StatFs {
            block_size: 4096,
            total_blocks: 0,
            max_filename_len: 255,
        })
    }
}
