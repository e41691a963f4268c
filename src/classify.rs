//! Target state classification.
//!
//! A target is *initialized* once some same-extension entry in the scan
//! directory is a hard link to it; the first listed variant aliasing it is
//! the active one. Otherwise it is *uninitialized*, including when the directory
//! cannot be read, so that a scan failure never blocks `init`.

use std::path::Path;

use tracing::debug;

use crate::error::SwitchError;
use crate::identity::same_file;
use crate::variants::{
    Variant, has_extension, list_variants, read_entry_names, target_extension,
};

/// Link state of a target relative to a scan directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// No variant aliases the target
    Uninitialized,
    /// The target aliases this variant
    Active(Variant),
}

impl LinkState {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Name of the active variant, if any
    pub fn active_name(&self) -> Option<&str> {
        match self {
            Self::Uninitialized => None,
            Self::Active(variant) => Some(&variant.name),
        }
    }
}

/// Classify `target` against the variants in `dir`.
///
/// The first listed variant aliasing the target is the active one.
pub fn classify(target: &Path, dir: &Path) -> LinkState {
    let variants = match list_variants(dir, target) {
        Ok(variants) => variants,
        Err(e) => {
            debug!(error = %e, "scan failed, treating target as uninitialized");
            return LinkState::Uninitialized;
        }
    };

    let state = match variants.into_iter().find(|v| v.active) {
        Some(variant) => LinkState::Active(variant),
        None => LinkState::Uninitialized,
    };

    debug!(path = %target.display(), state = ?state.active_name(), "classified target");
    state
}

/// True when no same-extension entry in `dir` aliases `target`.
///
/// This looks at every entry, so a target that sits in `dir` counts as
/// initialized once it exists.
pub fn is_uninitialized(target: &Path, dir: &Path) -> bool {
    let ext = target_extension(target);
    match read_entry_names(dir) {
        Ok(names) => !names
            .iter()
            .any(|name| has_extension(name, ext) && same_file(target, &dir.join(name))),
        Err(e) => {
            debug!(error = %e, "scan failed, treating target as uninitialized");
            true
        }
    }
}

/// True when any entry in `dir`, whatever its extension, aliases `target`.
pub fn has_original_file(target: &Path, dir: &Path) -> Result<bool, SwitchError> {
    let found = read_entry_names(dir)?
        .iter()
        .any(|name| same_file(target, &dir.join(name)));
    Ok(found)
}
