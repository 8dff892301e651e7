//! `/proc/[pid]/cmdline` 生成器

use alloc::vec::Vec;

use crate::inode::TaskContentGenerator;
use crate::ops::TaskInfo;

/// 参数之间的分隔符（ASCII 单元分隔符）
pub const CMDLINE_SEPARATOR: u8 = 0x1e;

/// 生成 `/proc/[pid]/cmdline` 内容的生成器
///
/// 参数之间以 [`CMDLINE_SEPARATOR`] 分隔，末尾不追加分隔符。
pub struct CmdlineGenerator;

impl TaskContentGenerator for CmdlineGenerator {
    fn generate(&self, task: &dyn TaskInfo) -> Vec<u8> {
        let args = task.cmdline();
        let mut content = Vec::with_capacity(args.iter().map(|a| a.len() + 1).sum());
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                content.push(CMDLINE_SEPARATOR);
            }
            content.extend_from_slice(arg.as_bytes());
        }
        content
    }
}
