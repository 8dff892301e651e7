//! 内容生成器
//!
//! 每个伪文件对应一个无状态的生成器，每次读取时根据当前内核状态生成完整文本。

mod cmdline;
mod compiler;
mod cpuinfo;
mod meminfo;
pub mod process;
mod uptime;
mod version;

pub use cmdline::BootCmdlineGenerator;
pub use compiler::CompilerGenerator;
pub use cpuinfo::CpuinfoGenerator;
pub use meminfo::MeminfoGenerator;
pub use uptime::UptimeGenerator;
pub use version::VersionGenerator;
