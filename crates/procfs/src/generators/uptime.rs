//! /proc/uptime 生成器

use alloc::format;
use alloc::vec::Vec;

use crate::inode::ContentGenerator;
use crate::ops::ProcOps;

/// `/proc/uptime` 内容生成器。
pub struct UptimeGenerator;

impl ContentGenerator for UptimeGenerator {
    fn generate(&self, ops: &dyn ProcOps) -> Vec<u8> {
        // 子滴答宽度为 2，不足时用空格补齐，如 `42. 7`
        format!("{}.{:2}\n", ops.ticks(), ops.subticks()).into_bytes()
    }
}
