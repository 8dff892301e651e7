//! 条目注册表
//!
//! 两张在编译期确定、运行期不变的表：根目录下的静态条目，以及每个进程目录下的条目。
//! 静态条目使用负数哨兵编号，进程条目使用小正数编号（所有进程共用），
//! 因而静态编号与任何真实 PID 都不会冲突。

use crate::generators::process::{CmdlineGenerator, StatusGenerator};
use crate::generators::{
    BootCmdlineGenerator, CompilerGenerator, CpuinfoGenerator, MeminfoGenerator, UptimeGenerator,
    VersionGenerator,
};
use crate::inode::{ContentGenerator, TaskContentGenerator};

/// 注册表条目：编号、名称以及绑定的内容生成器
pub struct ProcEntry<G: ?Sized + 'static> {
    /// 条目编号
    pub id: i32,
    /// 条目名称
    pub name: &'static str,
    /// 内容生成器
    pub generator: &'static G,
}

/// 根目录静态条目
pub type StaticEntry = ProcEntry<dyn ContentGenerator>;

/// 进程目录条目
pub type TaskEntry = ProcEntry<dyn TaskContentGenerator>;

/// `/proc` 下的静态条目（按注册顺序枚举）
pub static STATIC_ENTRIES: [StaticEntry; 6] = [
    ProcEntry {
        id: -1,
        name: "cpuinfo",
        generator: &CpuinfoGenerator,
    },
    ProcEntry {
        id: -2,
        name: "meminfo",
        generator: &MeminfoGenerator,
    },
    ProcEntry {
        id: -3,
        name: "uptime",
        generator: &UptimeGenerator,
    },
    ProcEntry {
        id: -4,
        name: "cmdline",
        generator: &BootCmdlineGenerator,
    },
    ProcEntry {
        id: -5,
        name: "version",
        generator: &VersionGenerator,
    },
    ProcEntry {
        id: -6,
        name: "compiler",
        generator: &CompilerGenerator,
    },
];

/// `/proc/<pid>` 下的条目
pub static PID_ENTRIES: [TaskEntry; 2] = [
    ProcEntry {
        id: 1,
        name: "cmdline",
        generator: &CmdlineGenerator,
    },
    ProcEntry {
        id: 2,
        name: "status",
        generator: &StatusGenerator,
    },
];

/// 按注册顺序取第 `index` 个条目，越界返回 `None`（枚举结束）
pub fn entry_at<G: ?Sized>(
    table: &'static [ProcEntry<G>],
    index: usize,
) -> Option<&'static ProcEntry<G>> {
    table.get(index)
}

/// 按名称线性查找条目
pub fn find_entry<G: ?Sized>(
    table: &'static [ProcEntry<G>],
    name: &str,
) -> Option<&'static ProcEntry<G>> {
    table.iter().find(|entry| entry.name == name)
}
