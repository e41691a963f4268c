//! Test utilities shared across test modules
//!
//! Small fixture helpers for building variant directories inside a `TempDir`.

use std::fs;
use std::path::Path;

/// Create a file at `path` whose content is its own file name
pub fn touch(path: &Path) {
    let content = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Hard link `link_path` to `original`
pub fn link(original: &Path, link_path: &Path) {
    if let Some(parent) = link_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::hard_link(original, link_path).unwrap();
}
