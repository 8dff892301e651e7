//! procfs 外部协作者的 Mock 实现
//!
//! 注意：这里不直接依赖 `procfs` crate（避免循环依赖）。
//! `procfs` crate 在 `cfg(test)` 下为这些类型实现其 trait（例如 `ProcOps` / `TaskInfo`）。

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use spin::Mutex;

/// Mock 的进程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTask {
    /// 进程 ID
    pub pid: u32,
    /// 进程名
    pub name: String,
    /// 参数向量
    pub argv: Vec<String>,
    /// 线程组 ID（0 表示未设置）
    pub group: u32,
    /// 所属用户
    pub uid: u32,
    /// 是否处于可运行状态
    pub ready: bool,
}

impl MockTask {
    /// 创建一个可运行、属于 root 的进程
    pub fn new(pid: u32, name: &str) -> Self {
        Self {
            pid,
            name: String::from(name),
            argv: alloc::vec![String::from(name)],
            group: 0,
            uid: 0,
            ready: true,
        }
    }

    /// 设置参数向量
    pub fn with_argv(mut self, argv: &[&str]) -> Self {
        self.argv = argv.iter().map(|a| String::from(*a)).collect();
        self
    }

    /// 设置线程组
    pub fn with_group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    /// 设置用户
    pub fn with_uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    /// 设置为睡眠状态
    pub fn sleeping(mut self) -> Self {
        self.ready = false;
        self
    }
}

/// Mock 的内核状态（进程表、内存计数、时钟、启动参数）
///
/// 进程表按插入顺序遍历，与真实内核的进程链表一致。
pub struct MockProcOps {
    tasks: Mutex<Vec<MockTask>>,
    total_kb: AtomicUsize,
    used_kb: AtomicUsize,
    ticks: AtomicU64,
    subticks: AtomicU64,
    boot_cmdline: Mutex<Option<String>>,
}

impl MockProcOps {
    /// 空进程表、零计数
    pub const fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            total_kb: AtomicUsize::new(0),
            used_kb: AtomicUsize::new(0),
            ticks: AtomicU64::new(0),
            subticks: AtomicU64::new(0),
            boot_cmdline: Mutex::new(None),
        }
    }

    /// 加入一个进程（追加到遍历顺序末尾）
    pub fn spawn(&self, task: MockTask) {
        self.tasks.lock().push(task);
    }

    /// 回收一个进程，返回它是否存在
    pub fn reap(&self, pid: u32) -> bool {
        let mut tasks = self.tasks.lock();
        let before = tasks.len();
        tasks.retain(|t| t.pid != pid);
        tasks.len() != before
    }

    /// 修改进程的可运行状态
    pub fn set_ready(&self, pid: u32, ready: bool) {
        if let Some(task) = self.tasks.lock().iter_mut().find(|t| t.pid == pid) {
            task.ready = ready;
        }
    }

    /// 按 PID 取进程快照
    pub fn task(&self, pid: u32) -> Option<MockTask> {
        self.tasks.lock().iter().find(|t| t.pid == pid).cloned()
    }

    /// 当前遍历顺序下的 PID 列表
    pub fn pids(&self) -> Vec<u32> {
        self.tasks.lock().iter().map(|t| t.pid).collect()
    }

    /// 设置内存计数（KiB）
    pub fn set_memory(&self, total_kb: usize, used_kb: usize) {
        self.total_kb.store(total_kb, Ordering::Relaxed);
        self.used_kb.store(used_kb, Ordering::Relaxed);
    }

    /// 总内存（KiB）
    pub fn total_kb(&self) -> usize {
        self.total_kb.load(Ordering::Relaxed)
    }

    /// 已用内存（KiB）
    pub fn used_kb(&self) -> usize {
        self.used_kb.load(Ordering::Relaxed)
    }

    /// 设置时钟
    pub fn set_time(&self, ticks: u64, subticks: u64) {
        self.ticks.store(ticks, Ordering::Relaxed);
        self.subticks.store(subticks, Ordering::Relaxed);
    }

    /// 时钟滴答数
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// 子滴答数
    pub fn subticks(&self) -> u64 {
        self.subticks.load(Ordering::Relaxed)
    }

    /// 设置内核启动参数
    pub fn set_boot_cmdline(&self, cmdline: Option<&str>) {
        *self.boot_cmdline.lock() = cmdline.map(String::from);
    }

    /// 内核启动参数
    pub fn boot_cmdline(&self) -> Option<String> {
        self.boot_cmdline.lock().clone()
    }
}

impl Default for MockProcOps {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局 Mock 实例
pub static MOCK_PROC_OPS: MockProcOps = MockProcOps::new();
