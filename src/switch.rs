//! Link switching logic.
//!
//! This module implements the two mutating operations of `fileswitcher`:
//! - `init`: record the current target content as the `default` variant.
//! - `set`: relink the target to another variant.
//!
//! Relinking never leaves the target missing: the variant is first linked
//! to a staging name next to the target, which is then renamed over it.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::classify::{has_original_file, is_uninitialized};
use crate::error::SwitchError;
use crate::identity::same_file;
use crate::variants::{target_extension, variant_path};

/// Variant name created by `init`
pub const DEFAULT_VARIANT: &str = "default";

/// Suffix of the staging link used while relinking
const STAGING_SUFFIX: &str = ".fileswitcher.tmp";

/// Result of a switch operation that did not hit an OS error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A link was created (or already pointed at the requested variant)
    Linked { link: PathBuf },
    /// `init` found a variant already aliasing the target
    AlreadyInitialized,
    /// `set` found nothing in the directory aliasing the target
    NoOriginal,
    /// `set` did not receive exactly one variant name
    BadArgs,
}

/// Create the `default` variant in `dir` as a hard link to `target`.
///
/// Does nothing if the target is already linked to a variant.
pub fn init_default(target: &Path, dir: &Path) -> Result<Outcome, SwitchError> {
    if !is_uninitialized(target, dir) {
        debug!(path = %target.display(), "target already initialized");
        return Ok(Outcome::AlreadyInitialized);
    }

    let link = variant_path(dir, DEFAULT_VARIANT, target_extension(target));
    fs::hard_link(target, &link).map_err(|source| SwitchError::Link {
        src: target.to_path_buf(),
        dst: link.clone(),
        source,
    })?;

    info!(link = %link.display(), "created default variant");
    Ok(Outcome::Linked { link })
}

/// Relink `target` to the variant named by the single entry of `args`.
pub fn set_variant(target: &Path, dir: &Path, args: &[String]) -> Result<Outcome, SwitchError> {
    let [name] = args else {
        debug!(count = args.len(), "set expects exactly one variant name");
        return Ok(Outcome::BadArgs);
    };

    if !has_original_file(target, dir)? {
        debug!(path = %target.display(), "no entry aliases the target");
        return Ok(Outcome::NoOriginal);
    }

    let variant = variant_path(dir, name, target_extension(target));
    relink(&variant, target)?;

    info!(variant = %name, path = %target.display(), "switched target");
    Ok(Outcome::Linked {
        link: target.to_path_buf(),
    })
}

/// Atomically replace `target` with a hard link to `source`.
///
/// If linking fails the target is left untouched.
pub fn relink(source: &Path, target: &Path) -> Result<(), SwitchError> {
    // rename(2) between two links of one file is a no-op that keeps both names
    if same_file(source, target) {
        debug!(path = %target.display(), "target already aliases variant");
        return Ok(());
    }

    let staging = staging_path(target);
    remove_if_exists(&staging)?;

    fs::hard_link(source, &staging).map_err(|e| SwitchError::Link {
        src: source.to_path_buf(),
        dst: target.to_path_buf(),
        source: e,
    })?;

    if let Err(e) = fs::rename(&staging, target) {
        if let Err(cleanup) = fs::remove_file(&staging) {
            warn!(path = %staging.display(), error = %cleanup, "failed to remove staging link");
        }
        return Err(SwitchError::Rename {
            src: staging,
            dst: target.to_path_buf(),
            source: e,
        });
    }

    Ok(())
}

/// Hidden sibling of `target` used as the staging link
fn staging_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or_else(|| OsStr::new("target")));
    name.push(STAGING_SUFFIX);
    target.with_file_name(name)
}

fn remove_if_exists(path: &Path) -> Result<(), SwitchError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(SwitchError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::test_utils::{link, touch};
    use tempfile::TempDir;

    fn args(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_init_creates_default_variant() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let target = dir.join("target").join("settings.yaml");
        touch(&target);

        let outcome = init_default(&target, dir).unwrap();

        let default = dir.join("default.yaml");
        assert_eq!(outcome, Outcome::Linked { link: default.clone() });
        assert!(same_file(&target, &default));
        assert!(!is_uninitialized(&target, dir));
    }

    #[test]
    fn test_dotfile_init_and_set() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("variants");
        touch(&dir.join("work.npmrc"));
        touch(&dir.join("Makefile"));
        let target = temp_dir.path().join("home").join(".npmrc");
        touch(&target);

        let outcome = init_default(&target, &dir).unwrap();
        let default = dir.join("default.npmrc");
        assert_eq!(outcome, Outcome::Linked { link: default.clone() });
        assert!(same_file(&target, &default));

        set_variant(&target, &dir, &args(&["work"])).unwrap();
        assert!(same_file(&target, &dir.join("work.npmrc")));
        assert_eq!(classify(&target, &dir).active_name(), Some("work"));
    }

    #[test]
    fn test_init_twice_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let target = dir.join("target").join("settings.yaml");
        touch(&target);

        init_default(&target, dir).unwrap();
        let outcome = init_default(&target, dir).unwrap();

        assert_eq!(outcome, Outcome::AlreadyInitialized);
    }

    #[test]
    fn test_init_without_target_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let target = dir.join("target").join("settings.yaml");

        let result = init_default(&target, dir);

        assert!(matches!(result, Err(SwitchError::Link { .. })));
        assert!(is_uninitialized(&target, dir));
    }

    #[test]
    fn test_set_switches_variant() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(&dir.join("a.txt"));
        touch(&dir.join("b.txt"));
        let target = dir.join("target").join("current.txt");
        link(&dir.join("a.txt"), &target);

        let outcome = set_variant(&target, dir, &args(&["b"])).unwrap();

        assert_eq!(outcome, Outcome::Linked { link: target.clone() });
        assert!(same_file(&target, &dir.join("b.txt")));
        assert!(!same_file(&target, &dir.join("a.txt")));
        assert_eq!(fs::read_to_string(&target).unwrap(), "b.txt");
        assert_eq!(classify(&target, dir).active_name(), Some("b"));
        assert!(!staging_path(&target).exists());
    }

    #[test]
    fn test_set_to_active_variant_keeps_link() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(&dir.join("a.txt"));
        let target = dir.join("target").join("current.txt");
        link(&dir.join("a.txt"), &target);

        set_variant(&target, dir, &args(&["a"])).unwrap();

        assert!(same_file(&target, &dir.join("a.txt")));
        assert!(!staging_path(&target).exists());
    }

    #[test]
    fn test_set_with_wrong_arg_count_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(&dir.join("a.txt"));
        touch(&dir.join("b.txt"));
        let target = dir.join("target").join("current.txt");
        link(&dir.join("a.txt"), &target);

        assert_eq!(
            set_variant(&target, dir, &args(&[])).unwrap(),
            Outcome::BadArgs
        );
        assert_eq!(
            set_variant(&target, dir, &args(&["a", "b"])).unwrap(),
            Outcome::BadArgs
        );
        assert!(same_file(&target, &dir.join("a.txt")));
    }

    #[test]
    fn test_set_without_original_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("variants");
        touch(&dir.join("b.txt"));
        let target = temp_dir.path().join("current.txt");
        touch(&target);

        let outcome = set_variant(&target, &dir, &args(&["b"])).unwrap();

        assert_eq!(outcome, Outcome::NoOriginal);
        assert!(!same_file(&target, &dir.join("b.txt")));
        assert_eq!(fs::read_to_string(&target).unwrap(), "current.txt");
    }

    #[test]
    fn test_set_unknown_variant_keeps_target() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(&dir.join("a.txt"));
        let target = dir.join("target").join("current.txt");
        link(&dir.join("a.txt"), &target);

        let result = set_variant(&target, dir, &args(&["missing"]));

        assert!(matches!(result, Err(SwitchError::Link { .. })));
        assert!(same_file(&target, &dir.join("a.txt")));
        assert!(!staging_path(&target).exists());
    }

    #[test]
    fn test_relink_clears_stale_staging_link() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(&dir.join("a.txt"));
        touch(&dir.join("b.txt"));
        let target = dir.join("current.txt");
        link(&dir.join("a.txt"), &target);
        touch(&staging_path(&target));

        relink(&dir.join("b.txt"), &target).unwrap();

        assert!(same_file(&target, &dir.join("b.txt")));
        assert!(!staging_path(&target).exists());
    }

    #[test]
    fn test_failed_rename_cleans_staging_link() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(&dir.join("a.txt"));
        let target = dir.join("current.txt");
        touch(&target.join("occupied"));

        let result = relink(&dir.join("a.txt"), &target);

        assert!(matches!(result, Err(SwitchError::Rename { .. })));
        assert!(!staging_path(&target).exists());
        assert!(target.join("occupied").exists());
    }

    #[test]
    fn test_staging_path() {
        let staged = staging_path(Path::new("conf/current.txt"));
        assert_eq!(staged, PathBuf::from("conf/.current.txt.fileswitcher.tmp"));
    }
}
