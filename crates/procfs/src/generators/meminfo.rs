//! /proc/meminfo 生成器

use alloc::{format, vec::Vec};

use crate::inode::ContentGenerator;
use crate::ops::ProcOps;

/// `/proc/meminfo` 内容生成器。
pub struct MeminfoGenerator;

impl ContentGenerator for MeminfoGenerator {
    fn generate(&self, ops: &dyn ProcOps) -> Vec<u8> {
        // 两个计数各自独立更新，读到不一致的组合也可以接受
        let total_kb = ops.total_memory_kb();
        let free_kb = total_kb.saturating_sub(ops.used_memory_kb());

        format!("MemTotal: {} kB\nMemFree: {} kB\n", total_kb, free_kb).into_bytes()
    }
}
