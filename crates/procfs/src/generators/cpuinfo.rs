//! /proc/cpuinfo 生成器

use alloc::vec::Vec;

use crate::inode::ContentGenerator;
use crate::ops::ProcOps;

/// `/proc/cpuinfo` 内容生成器。
///
/// 尚未实现：内核还没有可导出的 CPU 拓扑信息，始终返回空内容。
pub struct CpuinfoGenerator;

impl ContentGenerator for CpuinfoGenerator {
    fn generate(&self, _ops: &dyn ProcOps) -> Vec<u8> {
        Vec::new()
    }
}
