//! 内核虚拟文件系统层
//!
//! 此 crate 提供伪文件系统挂载所需的最小节点抽象：
//!
//! - [`Inode`] trait - 索引节点接口（读取、按名查找、按索引枚举）
//! - [`FileSystem`] trait - 文件系统接口
//! - [`DirEntry`] - 轻量级目录项
//! - [`FsError`] - 与 POSIX 兼容的错误码

#![no_std]

extern crate alloc;

pub mod error;

mod file_system;
mod inode;

// Re-export error
pub use error::FsError;

// Re-export inode
pub use inode::{DirEntry, FileMode, Inode, InodeMetadata, InodeType, read_window};

// Re-export file_system
pub use file_system::{FileSystem, StatFs};
