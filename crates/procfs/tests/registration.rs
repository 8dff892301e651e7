//! 通过全局注册的 `ProcOps` 挂载 procfs 并遍历整棵树

use std::sync::{Arc, Once};

use procfs::{KernelVersion, Pid, ProcFS, ProcOps, TaskInfo, register_proc_ops};
use vfs::{FileSystem, FsError, Inode, InodeType};

struct Task {
    pid: Pid,
    name: &'static str,
    argv: &'static [&'static str],
}

impl TaskInfo for Task {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn name(&self) -> String {
        self.name.to_string()
    }

    fn cmdline(&self) -> Vec<String> {
        self.argv.iter().map(|a| a.to_string()).collect()
    }

    fn group(&self) -> Pid {
        0
    }

    fn uid(&self) -> u32 {
        0
    }

    fn is_ready(&self) -> bool {
        self.pid == 1
    }
}

/// 固定状态的内核：两个进程，时钟与内存计数不变
struct FixedKernel;

const TASKS: [(Pid, &str, &[&str]); 2] = [(1, "init", &["init"]), (2, "sh", &["sh", "-l"])];

impl ProcOps for FixedKernel {
    fn find_task(&self, pid: Pid) -> Option<Arc<dyn TaskInfo>> {
        TASKS
            .iter()
            .find(|(p, ..)| *p == pid)
            .map(|&(pid, name, argv)| Arc::new(Task { pid, name, argv }) as Arc<dyn TaskInfo>)
    }

    fn list_process_pids(&self) -> Vec<Pid> {
        TASKS.iter().map(|(pid, ..)| *pid).collect()
    }

    fn total_memory_kb(&self) -> usize {
        131072
    }

    fn used_memory_kb(&self) -> usize {
        65536
    }

    fn ticks(&self) -> u64 {
        3
    }

    fn subticks(&self) -> u64 {
        5
    }

    fn kernel_version(&self) -> KernelVersion {
        KernelVersion {
            name: "SanktaOS",
            major: 1,
            minor: 2,
            lower: 3,
            suffix: "",
            codename: "Vigil",
            build_date: "2026-10-16",
            build_time: "08:30:00",
            arch: "loongarch64",
            compiler: "rustc 1.85.0 (stable)",
        }
    }

    fn boot_cmdline(&self) -> Option<String> {
        None
    }
}

static KERNEL: FixedKernel = FixedKernel;
static REGISTER: Once = Once::new();

fn mount() -> Arc<ProcFS> {
    REGISTER.call_once(|| unsafe { register_proc_ops(&KERNEL) });
    ProcFS::new()
}

fn read_to_string(inode: &Arc<dyn Inode>) -> String {
    let mut buf = [0u8; 512];
    let n = inode.read_at(0, &mut buf).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

#[test]
fn test_walk_registered_tree() {
    let procfs = mount();
    let root = procfs.root_inode();

    let entries = root.readdir().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "cpuinfo", "meminfo", "uptime", "cmdline", "version", "compiler", "1", "2"
        ]
    );

    for entry in &entries {
        let node = root.lookup(&entry.name).unwrap();
        let meta = node.metadata().unwrap();
        assert_eq!(meta.inode_type, entry.inode_type);
        if meta.inode_type == InodeType::Directory {
            assert_eq!(node.readdir().unwrap().len(), 2);
        }
    }
}

#[test]
fn test_registered_static_contents() {
    let root = mount().root_inode();

    assert_eq!(
        read_to_string(&root.lookup("meminfo").unwrap()),
        "MemTotal: 131072 kB\nMemFree: 65536 kB\n"
    );
    assert_eq!(read_to_string(&root.lookup("uptime").unwrap()), "3. 5\n");
    assert_eq!(read_to_string(&root.lookup("cmdline").unwrap()), "\n");
    assert_eq!(
        read_to_string(&root.lookup("version").unwrap()),
        "SanktaOS 1.2.3 Vigil 2026-10-16 08:30:00 loongarch64\n"
    );
    assert_eq!(
        read_to_string(&root.lookup("compiler").unwrap()),
        "rustc 1.85.0 (stable)\n"
    );
    assert_eq!(read_to_string(&root.lookup("cpuinfo").unwrap()), "");
}

#[test]
fn test_registered_process_contents() {
    let root = mount().root_inode();
    let sh = root.lookup("2").unwrap();

    assert_eq!(read_to_string(&sh.lookup("cmdline").unwrap()), "sh\u{1e}-l");
    assert_eq!(
        read_to_string(&sh.lookup("status").unwrap()),
        "Name:\tsh\nState:\tS\nTgid:\t2\nPid:\t2\nUid:\t0\n"
    );
    assert_eq!(root.lookup("3").err(), Some(FsError::NotFound));
}
