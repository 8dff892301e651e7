// Unit tests for procfs.
//
// 每个测试使用独立的 `MockProcOps`（泄漏为 'static），互不干扰，可以并行运行。

extern crate alloc;
extern crate test_support;

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use test_support::mock::proc::{MockProcOps, MockTask};
use vfs::{FileSystem, Inode};

use crate::ProcFS;


/// 创建一个独立的 mock 内核状态
fn mock_kernel() -> &'static MockProcOps {
    let ops = Box::leak(Box::new(MockProcOps::new()));
    ops.set_memory(65536, 16384);
    ops.set_time(42, 7);
    ops.set_boot_cmdline(Some("root=/dev/vda rw"));
    ops
}

/// 创建挂载在 mock 内核上的 procfs 及其根节点
fn create_test_procfs() -> (&'static MockProcOps, Arc<ProcFS>, Arc<dyn Inode>) {
    let ops = mock_kernel();
    let procfs = ProcFS::with_ops(ops);
    let root = procfs.root_inode();
    (ops, procfs, root)
}

/// 一次性读出节点的全部内容
fn read_all(inode: &Arc<dyn Inode>) -> Vec<u8> {
    let mut buf = [0u8; 4096];
    let n = inode.read_at(0, &mut buf).unwrap();
    buf[..n].to_vec()
}

/// 逐项枚举目录，返回名称列表
fn list_names(inode: &Arc<dyn Inode>) -> Vec<alloc::string::String> {
    inode
        .readdir()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect()
}
