use std::any::Any;
use std::sync::Arc;

use vfs::{DirEntry, FileMode, FsError, Inode, InodeMetadata, InodeType, read_window};

/// 固定三个子项的测试目录
struct ThreeEntries;

impl Inode for ThreeEntries {
    fn name(&self) -> &str {
        "three"
    }

    fn metadata(&self) -> Result<InodeMetadata, FsError> {
        Ok(InodeMetadata {
            inode_no: 1,
            inode_type: InodeType::Directory,
            mode: FileMode::from_bits_truncate(0o555) | FileMode::S_IFDIR,
            uid: 0,
            gid: 0,
            size: 0,
            nlinks: 2,
        })
    }

    fn read_at(&self, _offset: usize, _buf: &mut [u8]) -> Result<usize, FsError> {
        Err(FsError::IsDirectory)
    }

    fn lookup(&self, _name: &str) -> Result<Arc<dyn Inode>, FsError> {
        Err(FsError::NotFound)
    }

    fn readdir_at(&self, index: usize) -> Result<Option<DirEntry>, FsError> {
        let names = ["a", "b", "c"];
        Ok(names.get(index).map(|name| DirEntry {
            name: name.to_string(),
            inode_no: -(index as i64) - 1,
            inode_type: InodeType::File,
        }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_readdir_collects_until_end() {
    let dir = ThreeEntries;
    let entries = dir.readdir().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(entries[2].inode_no, -3);
}

#[test]
fn test_default_write_is_read_only() {
    let dir = ThreeEntries;
    assert_eq!(dir.write_at(0, b"x"), Err(FsError::ReadOnlyFs));
}

#[test]
fn test_downcast_ref() {
    let dir: Arc<dyn Inode> = Arc::new(ThreeEntries);
    assert!(dir.downcast_ref::<ThreeEntries>().is_some());
}

#[test]
fn test_file_mode_read_only() {
    let mode = FileMode::from_bits_truncate(0o555);
    assert!(mode.can_read());
    assert!(mode.can_execute());
    assert!(!mode.can_write());
    assert_eq!((mode | FileMode::S_IFDIR).permissions(), 0o555);
}

#[test]
fn test_read_window_clamps() {
    let data = b"hello";
    let mut buf = [0u8; 16];

    assert_eq!(read_window(data, 0, &mut buf), 5);
    assert_eq!(&buf[..5], b"hello");

    assert_eq!(read_window(data, 3, &mut buf), 2);
    assert_eq!(&buf[..2], b"lo");

    let mut small = [0u8; 2];
    assert_eq!(read_window(data, 1, &mut small), 2);
    assert_eq!(&small, b"el");

    assert_eq!(read_window(data, 5, &mut buf), 0);
    assert_eq!(read_window(data, 99, &mut buf), 0);
    assert_eq!(read_window(b"", 0, &mut buf), 0);
}
