//! Variant discovery.
//!
//! A variant is any entry directly inside the scan directory whose extension
//! equals the target's extension. The extension is everything after the last
//! `.` of the file name, so a dotfile target like `.npmrc` defines the family
//! `npmrc` and `work.npmrc` is its variant `work`. Splitting on the last dot
//! also makes `a.txt.txt` the variant `a.txt`.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SwitchError;
use crate::identity::{FileIdentity, same_file};

/// A candidate file the target can be linked to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// File name without the extension
    pub name: String,
    /// Full path inside the scan directory
    pub path: PathBuf,
    /// Whether the target currently aliases this file
    pub active: bool,
}

/// Split `file_name` at its last `.` into stem and extension.
///
/// A leading dot counts, so `.npmrc` splits into `""` and `npmrc`.
pub fn split_extension(file_name: &OsStr) -> (&OsStr, Option<&OsStr>) {
    let bytes = file_name.as_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(dot) => (
            OsStr::from_bytes(&bytes[..dot]),
            Some(OsStr::from_bytes(&bytes[dot + 1..])),
        ),
        None => (file_name, None),
    }
}

/// Extension of the target, which defines the variant family
pub fn target_extension(target: &Path) -> Option<&OsStr> {
    target.file_name().and_then(|name| split_extension(name).1)
}

/// Whether `file_name` belongs to the family `ext`
pub fn has_extension(file_name: &OsStr, ext: Option<&OsStr>) -> bool {
    split_extension(file_name).1 == ext
}

/// Return the variant name for `file_name`, or `None` if its extension
/// differs from `ext`.
///
/// Entries with an empty stem (the bare `.npmrc`) or a non-UTF-8 stem are
/// not variants, since `set` could never name them.
pub fn variant_name(file_name: &OsStr, ext: Option<&OsStr>) -> Option<String> {
    let (stem, candidate_ext) = split_extension(file_name);
    if candidate_ext != ext || stem.is_empty() {
        return None;
    }
    match stem.to_str() {
        Some(name) => Some(name.to_string()),
        None => {
            warn!(file = ?file_name, "skipping variant with non-UTF-8 name");
            None
        }
    }
}

/// File name for the variant `name` in the family `ext`
pub fn variant_file_name(name: &str, ext: Option<&OsStr>) -> OsString {
    let mut file_name = OsString::from(name);
    if let Some(ext) = ext {
        file_name.push(".");
        file_name.push(ext);
    }
    file_name
}

/// Path of the variant `name` inside `dir`
pub fn variant_path(dir: &Path, name: &str, ext: Option<&OsStr>) -> PathBuf {
    dir.join(variant_file_name(name, ext))
}

/// Whether the entry `file_name` of `dir` is the target path itself.
///
/// Directories cannot be hard linked, so comparing the identity of the
/// target's parent with `dir` is exact.
pub fn is_target_entry(dir: &Path, file_name: &OsStr, target: &Path) -> bool {
    if target.file_name() != Some(file_name) {
        return false;
    }
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (FileIdentity::of(parent), FileIdentity::of(dir)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Read the names of all entries directly inside `dir`, sorted by name.
///
/// Entries that fail to read mid-iteration are skipped.
pub fn read_entry_names(dir: &Path) -> Result<Vec<OsString>, SwitchError> {
    let entries = fs::read_dir(dir).map_err(|source| SwitchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(e) => warn!(dir = %dir.display(), error = %e, "skipping unreadable entry"),
        }
    }
    names.sort();
    Ok(names)
}

/// List every variant of `target` found in `dir`, marking the active one.
///
/// The target itself is never listed, even when it lives in `dir`.
pub fn list_variants(dir: &Path, target: &Path) -> Result<Vec<Variant>, SwitchError> {
    let ext = target_extension(target);

    let variants: Vec<Variant> = read_entry_names(dir)?
        .into_iter()
        .filter(|file_name| !is_target_entry(dir, file_name, target))
        .filter_map(|file_name| {
            let name = variant_name(&file_name, ext)?;
            let path = dir.join(&file_name);
            let active = same_file(target, &path);
            Some(Variant { name, path, active })
        })
        .collect();

    debug!(
        dir = %dir.display(),
        count = variants.len(),
        "scanned variants"
    );
    Ok(variants)
}
