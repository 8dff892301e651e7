//! procfs 运行时操作 trait 定义和注册
//!
//! 此模块定义了 procfs 需要的外部依赖接口（进程表、内存计数、时钟、构建信息），
//! 通过 trait 抽象实现与 os crate 的解耦。procfs 只读取这些状态，从不修改。

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

/// 进程 ID
pub type Pid = u32;

/// procfs 运行时操作
///
/// os crate 需要实现此 trait 并在启动时注册。
///
/// 每个方法单独调用时必须自洽（例如一次按 PID 查找、一次遍历步进），
/// 但 procfs 不会在多次调用之间持有任何锁，也不要求跨调用的一致性。
pub trait ProcOps: Send + Sync {
    // ========== 进程表 ==========

    /// 获取指定 PID 的进程信息，进程不存在时返回 `None`
    fn find_task(&self, pid: Pid) -> Option<Arc<dyn TaskInfo>>;

    /// 按当前遍历顺序列出所有存活进程的 PID
    fn list_process_pids(&self) -> Vec<Pid>;

    /// 当前遍历顺序下的第 `index` 个进程
    ///
    /// 默认实现基于 [`ProcOps::list_process_pids`]；进程表支持直接步进时可以覆盖。
    fn nth_process_pid(&self, index: usize) -> Option<Pid> {
        self.list_process_pids().get(index).copied()
    }

    // ========== 内存计数 ==========

    /// 总内存（KiB）
    fn total_memory_kb(&self) -> usize;

    /// 已用内存（KiB）
    fn used_memory_kb(&self) -> usize;

    // ========== 时钟 ==========

    /// 启动以来的时钟滴答数
    fn ticks(&self) -> u64;

    /// 当前滴答内的子滴答数
    fn subticks(&self) -> u64;

    // ========== 构建信息 ==========

    /// 内核版本与构建信息
    fn kernel_version(&self) -> KernelVersion;

    /// 内核启动命令行，没有时返回 `None`
    fn boot_cmdline(&self) -> Option<String>;
}

/// 进程信息接口（用于 procfs）
pub trait TaskInfo: Send + Sync {
    /// 获取进程 ID
    fn pid(&self) -> Pid;

    /// 获取进程名称
    fn name(&self) -> String;

    /// 获取命令行参数
    fn cmdline(&self) -> Vec<String>;

    /// 获取线程组 ID，0 表示未设置
    fn group(&self) -> Pid;

    /// 获取所属用户 ID
    fn uid(&self) -> u32;

    /// 进程是否处于可运行（就绪）状态
    fn is_ready(&self) -> bool;

    /// 线程组 ID：设置了线程组时返回线程组，否则返回自身 PID
    fn tgid(&self) -> Pid {
        match self.group() {
            0 => self.pid(),
            group => group,
        }
    }
}

/// 内核版本与构建信息（编译期确定的静态数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelVersion {
    /// 内核名称
    pub name: &'static str,
    /// 主版本号
    pub major: u32,
    /// 次版本号
    pub minor: u32,
    /// 修订号
    pub lower: u32,
    /// 版本后缀（可为空）
    pub suffix: &'static str,
    /// 版本代号
    pub codename: &'static str,
    /// 构建日期
    pub build_date: &'static str,
    /// 构建时间
    pub build_time: &'static str,
    /// 目标架构
    pub arch: &'static str,
    /// 编译器标识
    pub compiler: &'static str,
}

impl KernelVersion {
    /// 格式化版本号，如 `0.1.0-dev`；后缀为空时省略 `-`
    pub fn version_string(&self) -> String {
        if self.suffix.is_empty() {
            format!("{}.{}.{}", self.major, self.minor, self.lower)
        } else {
            format!(
                "{}.{}.{}-{}",
                self.major, self.minor, self.lower, self.suffix
            )
        }
    }
}

// ========== ProcOps 注册 ==========

static PROC_OPS_DATA: AtomicUsize = AtomicUsize::new(0);
static PROC_OPS_VTABLE: AtomicUsize = AtomicUsize::new(0);

/// 注册 procfs 操作实现
///
/// # Safety
/// 必须在单线程环境下调用，且只能调用一次
pub unsafe fn register_proc_ops(ops: &'static dyn ProcOps) {
    let ptr = ops as *const dyn ProcOps;
    // SAFETY: 将 fat pointer 拆分为 data 和 vtable 两部分存储
    let (data, vtable) = unsafe { core::mem::transmute::<*const dyn ProcOps, (usize, usize)>(ptr) };
    PROC_OPS_DATA.store(data, Ordering::Release);
    PROC_OPS_VTABLE.store(vtable, Ordering::Release);
}

/// 获取已注册的 procfs 操作实现
///
/// # Panics
/// 如果尚未调用 [`register_proc_ops`] 注册实现，则 panic
#[inline]
pub fn proc_ops() -> &'static dyn ProcOps {
    let data = PROC_OPS_DATA.load(Ordering::Acquire);
    let vtable = PROC_OPS_VTABLE.load(Ordering::Acquire);
    if data == 0 {
        #[cfg(test)]
        {
            extern crate test_support;
            return &test_support::mock::proc::MOCK_PROC_OPS;
        }
        #[cfg(not(test))]
        panic!("procfs: ProcOps not registered");
    }
    // SAFETY: 重组 fat pointer
    unsafe { &*core::mem::transmute::<(usize, usize), *const dyn ProcOps>((data, vtable)) }
}
