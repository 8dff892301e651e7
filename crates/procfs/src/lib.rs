//! # ProcFS - 进程信息伪文件系统
//!
//! 只读的合成文件系统，以普通的层次化文件接口导出内核与进程信息。
//! 所有节点都在查找或枚举时临时合成，文件内容在每次读取时根据
//! 当前内核状态重新生成，不做任何缓存。
//!
//! ## 目录结构
//!
//! ```text
//! /proc
//! ├── cpuinfo        (暂未实现，始终为空)
//! ├── meminfo
//! ├── uptime
//! ├── cmdline        内核启动参数
//! ├── version
//! ├── compiler
//! └── <pid>/
//!     ├── cmdline    参数之间以 0x1E 分隔
//!     └── status
//! ```
//!
//! 外部依赖（进程表、内存计数、时钟、构建信息）通过 [`ProcOps`] 注入。

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod entry;
pub mod generators;
pub mod inode;
pub mod ops;
pub mod proc;

#[cfg(test)]
mod tests;

pub use entry::{PID_ENTRIES, ProcEntry, STATIC_ENTRIES, StaticEntry, TaskEntry};
pub use inode::{ContentGenerator, PROC_MODE, ProcFileSource, ProcInode, TaskContentGenerator};
pub use ops::{KernelVersion, Pid, ProcOps, TaskInfo, proc_ops, register_proc_ops};
pub use proc::{PROC_ROOT_NAME, ProcFS};
