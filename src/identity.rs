//! File identity checks.
//!
//! Two paths name the same file when they resolve to the same device and
//! inode pair, i.e. they are hard links to one another (or the same path).
//! Path strings and file contents play no part in the comparison.

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// The (device, inode) pair identifying the storage behind a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub dev: u64,
    pub ino: u64,
}

impl FileIdentity {
    /// Read the identity of `path`, following symlinks like `stat(2)`.
    pub fn of(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        Ok(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }
}

/// Check whether `a` and `b` are the same underlying file.
///
/// Any metadata failure (missing path, permission denied) yields `false`.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (FileIdentity::of(a), FileIdentity::of(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
