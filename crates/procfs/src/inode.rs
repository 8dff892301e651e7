//! ProcFS Inode 实现
//!
//! procfs 的节点不是持久实体：每次查找或枚举都会合成一个新的 [`ProcInode`]，
//! 节点之间不共享、不缓存，也不持有父节点引用。

use alloc::{
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use vfs::{DirEntry, FileMode, FsError, Inode, InodeMetadata, InodeType, read_window};

use crate::entry::{PID_ENTRIES, STATIC_ENTRIES, StaticEntry, TaskEntry, entry_at, find_entry};
use crate::ops::{Pid, ProcOps, TaskInfo};

/// 所有 procfs 节点共用的只读权限位（r-xr-xr-x）
pub const PROC_MODE: u32 = 0o555;

/// 根目录静态文件的内容生成器 trait
pub trait ContentGenerator: Send + Sync {
    /// 生成文件内容（每次调用时重新生成）
    fn generate(&self, ops: &dyn ProcOps) -> Vec<u8>;
}

/// 进程目录下文件的内容生成器 trait
pub trait TaskContentGenerator: Send + Sync {
    /// 根据进程的当前状态生成文件内容
    fn generate(&self, task: &dyn TaskInfo) -> Vec<u8>;
}

/// 文件节点的内容来源
#[derive(Clone, Copy)]
pub enum ProcFileSource {
    /// 根目录下的静态条目
    Static(&'static StaticEntry),
    /// 绑定到某个进程的条目
    Task(Pid, &'static TaskEntry),
}

impl ProcFileSource {
    /// 生成完整内容
    ///
    /// 绑定的进程已经退出时返回空内容。
    pub fn generate(&self, ops: &dyn ProcOps) -> Vec<u8> {
        match *self {
            ProcFileSource::Static(entry) => entry.generator.generate(ops),
            ProcFileSource::Task(pid, entry) => match ops.find_task(pid) {
                Some(task) => entry.generator.generate(task.as_ref()),
                None => {
                    log::debug!("procfs: read {}/{} after process exit", pid, entry.name);
                    Vec::new()
                }
            },
        }
    }

    /// 节点编号：静态条目为负数哨兵，进程条目为 PID
    fn inode_no(&self) -> i64 {
        match *self {
            ProcFileSource::Static(entry) => i64::from(entry.id),
            ProcFileSource::Task(pid, _) => i64::from(pid),
        }
    }
}

#[derive(Clone, Copy)]
enum ProcInodeKind {
    Root,
    PidDir(Pid),
    File(ProcFileSource),
}

/// ProcFS 中的 inode 节点。
pub struct ProcInode {
    name: String,
    kind: ProcInodeKind,
    ops: &'static dyn ProcOps,
}

impl ProcInode {
    /// 创建 `/proc` 根目录 inode。
    pub fn new_root(name: &str, ops: &'static dyn ProcOps) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            kind: ProcInodeKind::Root,
            ops,
        })
    }

    /// 创建绑定到内容来源的只读文件 inode
    pub fn new_file(name: &str, source: ProcFileSource, ops: &'static dyn ProcOps) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            kind: ProcInodeKind::File(source),
            ops,
        })
    }

    /// 为指定 PID 创建进程目录
    ///
    /// 不检查进程是否存在，由调用方（根目录查找）负责。
    pub fn new_process_dir(pid: Pid, ops: &'static dyn ProcOps) -> Arc<Self> {
        Arc::new(Self {
            name: pid.to_string(),
            kind: ProcInodeKind::PidDir(pid),
            ops,
        })
    }

    /// 文件节点的内容来源，目录返回 `None`
    pub fn source(&self) -> Option<ProcFileSource> {
        match self.kind {
            ProcInodeKind::File(source) => Some(source),
            _ => None,
        }
    }

    /// 节点绑定的 PID（进程目录及其下的文件）
    pub fn pid(&self) -> Option<Pid> {
        match self.kind {
            ProcInodeKind::PidDir(pid) | ProcInodeKind::File(ProcFileSource::Task(pid, _)) => {
                Some(pid)
            }
            _ => None,
        }
    }

    fn is_directory(&self) -> bool {
        !matches!(self.kind, ProcInodeKind::File(_))
    }

    /// 根目录查找
    ///
    /// 以数字开头的名称必须整体是合法的 PID（`"12abc"` 视为不存在），
    /// 不按前缀截取数字；其余名称在静态条目表中精确匹配。
    fn lookup_root(&self, name: &str) -> Result<Arc<dyn Inode>, FsError> {
        let first = name.bytes().next().ok_or(FsError::NotFound)?;

        if first.is_ascii_digit() {
            let pid: Pid = name.parse().map_err(|_| FsError::NotFound)?;
            if self.ops.find_task(pid).is_none() {
                log::debug!("procfs: lookup of vanished pid {}", pid);
                return Err(FsError::NotFound);
            }
            log::trace!("procfs: synthesize /{}", pid);
            return Ok(Self::new_process_dir(pid, self.ops) as Arc<dyn Inode>);
        }

        let entry = find_entry(&STATIC_ENTRIES, name).ok_or(FsError::NotFound)?;
        log::trace!("procfs: synthesize /{}", entry.name);
        let file = Self::new_file(entry.name, ProcFileSource::Static(entry), self.ops);
        Ok(file as Arc<dyn Inode>)
    }

    fn lookup_pid_dir(&self, pid: Pid, name: &str) -> Result<Arc<dyn Inode>, FsError> {
        let entry = find_entry(&PID_ENTRIES, name).ok_or(FsError::NotFound)?;
        log::trace!("procfs: synthesize /{}/{}", pid, entry.name);
        let file = Self::new_file(entry.name, ProcFileSource::Task(pid, entry), self.ops);
        Ok(file as Arc<dyn Inode>)
    }

    fn readdir_root(&self, index: usize) -> Option<DirEntry> {
        if let Some(entry) = entry_at(&STATIC_ENTRIES, index) {
            return Some(DirEntry {
                name: entry.name.to_string(),
                inode_no: i64::from(entry.id),
                inode_type: InodeType::File,
            });
        }

        // 每次都重新遍历进程表，两次调用之间进程可能已经创建或退出
        let offset = index - STATIC_ENTRIES.len();
        match self.ops.nth_process_pid(offset) {
            Some(pid) => Some(DirEntry {
                name: pid.to_string(),
                inode_no: i64::from(pid),
                inode_type: InodeType::Directory,
            }),
            None => {
                log::debug!("procfs: readdir index {} past live processes", index);
                None
            }
        }
    }

    fn readdir_pid_dir(&self, index: usize) -> Option<DirEntry> {
        entry_at(&PID_ENTRIES, index).map(|entry| DirEntry {
            name: entry.name.to_string(),
            inode_no: i64::from(entry.id),
            inode_type: InodeType::File,
        })
    }
}

impl Inode for ProcInode {
    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> Result<InodeMetadata, FsError> {
        let (inode_no, inode_type, type_bits, nlinks) = match self.kind {
            ProcInodeKind::Root => (0, InodeType::Directory, FileMode::S_IFDIR, 2),
            ProcInodeKind::PidDir(pid) => {
                (i64::from(pid), InodeType::Directory, FileMode::S_IFDIR, 2)
            }
            ProcInodeKind::File(source) => {
                (source.inode_no(), InodeType::File, FileMode::S_IFREG, 1)
            }
        };

        Ok(InodeMetadata {
            inode_no,
            inode_type,
            mode: FileMode::from_bits_truncate(PROC_MODE) | type_bits,
            uid: 0,
            gid: 0,
            size: 0,
            nlinks,
        })
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError> {
        match self.kind {
            ProcInodeKind::File(source) => {
                let data = source.generate(self.ops);
                let read = read_window(&data, offset, buf);
                log::trace!(
                    "procfs: read {} @{} -> {}/{}",
                    self.name,
                    offset,
                    read,
                    data.len()
                );
                Ok(read)
            }
            _ => Err(FsError::IsDirectory),
        }
    }

    fn lookup(&self, name: &str) -> Result<Arc<dyn Inode>, FsError> {
        match self.kind {
            ProcInodeKind::Root => self.lookup_root(name),
            ProcInodeKind::PidDir(pid) => self.lookup_pid_dir(pid, name),
            ProcInodeKind::File(_) => Err(FsError::NotDirectory),
        }
    }

    fn readdir_at(&self, index: usize) -> Result<Option<DirEntry>, FsError> {
        match self.kind {
            ProcInodeKind::Root => Ok(self.readdir_root(index)),
            ProcInodeKind::PidDir(_) => Ok(self.readdir_pid_dir(index)),
            ProcInodeKind::File(_) => Err(FsError::NotDirectory),
        }
    }

    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}

impl core::fmt::Debug for ProcInode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProcInode")
            .field("name", &self.name)
            .field("directory", &self.is_directory())
            .field("pid", &self.pid())
            .finish()
    }
}
