//! 进程目录（`/proc/[pid]`）下的内容生成器

pub mod cmdline;
pub mod status;

pub use cmdline::{CMDLINE_SEPARATOR, CmdlineGenerator};
pub use status::StatusGenerator;
