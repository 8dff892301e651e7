//! /proc/cmdline 生成器

use alloc::format;
use alloc::vec::Vec;

use crate::inode::ContentGenerator;
use crate::ops::ProcOps;

/// `/proc/cmdline` 内容生成器（内核启动参数）。
pub struct BootCmdlineGenerator;

impl ContentGenerator for BootCmdlineGenerator {
    fn generate(&self, ops: &dyn ProcOps) -> Vec<u8> {
        let cmdline = ops.boot_cmdline().unwrap_or_default();
        format!("{}\n", cmdline).into_bytes()
    }
}
