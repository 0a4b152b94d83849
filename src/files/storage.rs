//! File access
//!
//! Every read and write the save system performs goes through [`Storage`],
//! so tests can swap the filesystem for an in-memory or counting store.

use std::fs;
use std::io;
use std::path::Path;

/// Minimal file access needed by the save system
pub trait Storage {
    /// Check whether an entry exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate the file and write `contents`
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Storage backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, contents)
    }
}
