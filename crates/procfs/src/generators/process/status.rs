//! `/proc/[pid]/status` 生成器

use alloc::{format, vec::Vec};

use crate::inode::TaskContentGenerator;
use crate::ops::TaskInfo;

/// 生成 `/proc/[pid]/status` 内容的生成器
pub struct StatusGenerator;

impl TaskContentGenerator for StatusGenerator {
    fn generate(&self, task: &dyn TaskInfo) -> Vec<u8> {
        let state = if task.is_ready() { 'R' } else { 'S' };

        format!(
            "Name:\t{}\n\
             State:\t{}\n\
             Tgid:\t{}\n\
             Pid:\t{}\n\
             Uid:\t{}\n",
            task.name(),
            state,
            task.tgid(),
            task.pid(),
            task.uid()
        )
        .into_bytes()
    }
}
