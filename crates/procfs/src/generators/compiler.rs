//! /proc/compiler 生成器

use alloc::format;
use alloc::vec::Vec;

use crate::inode::ContentGenerator;
use crate::ops::ProcOps;

/// `/proc/compiler` 内容生成器。
pub struct CompilerGenerator;

impl ContentGenerator for CompilerGenerator {
    fn generate(&self, ops: &dyn ProcOps) -> Vec<u8> {
        format!("{}\n", ops.kernel_version().compiler).into_bytes()
    }
}
