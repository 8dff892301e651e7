//! /proc/version 生成器

use alloc::format;
use alloc::vec::Vec;

use crate::inode::ContentGenerator;
use crate::ops::ProcOps;

/// `/proc/version` 内容生成器。
///
/// 格式：`名称 版本号 代号 构建日期 构建时间 架构`，单行。
pub struct VersionGenerator;

impl ContentGenerator for VersionGenerator {
    fn generate(&self, ops: &dyn ProcOps) -> Vec<u8> {
        let version = ops.kernel_version();
        format!(
            "{} {} {} {} {} {}\n",
            version.name,
            version.version_string(),
            version.codename,
            version.build_date,
            version.build_time,
            version.arch
        )
        .into_bytes()
    }
}
