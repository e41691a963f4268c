//! Handler functions for each CLI command (`init`, `list`, `set`, `current`).
//!
//! Commands never fail the process: OS errors are printed through
//! `crate::ui` and the command ends, precondition misses are silent. The
//! returned `Outcome` lets callers see what happened without scraping output.

use std::path::Path;

use tracing::debug;

use crate::classify::{LinkState, classify};
use crate::config::Config;
use crate::switch::{Outcome, init_default, set_variant};
use crate::ui::Ui;
use crate::variants::{Variant, list_variants};

/// Directory scanned for variants, relative to the working directory
pub const SCAN_DIR: &str = ".";

/// Create the `default` variant if the target is not linked yet
pub fn init(config: &Config, dir: &Path, ui: &Ui) -> Option<Outcome> {
    match init_default(&config.target, dir) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            ui.report(e.to_string());
            None
        }
    }
}

/// Print every variant, marking the one the target aliases
pub fn list(config: &Config, dir: &Path, ui: &Ui) -> Vec<Variant> {
    let variants = list_variants(dir, &config.target).unwrap_or_else(|e| {
        ui.report(e.to_string());
        Vec::new()
    });

    for line in render_list(&variants, ui) {
        ui.println(line);
    }
    variants
}

/// Lines printed by `list`, in directory order
pub fn render_list(variants: &[Variant], ui: &Ui) -> Vec<String> {
    variants
        .iter()
        .map(|v| ui.variant_line(&v.name, v.active))
        .collect()
}

/// Relink the target to the variant named in `args`
pub fn set(config: &Config, dir: &Path, args: &[String], ui: &Ui) -> Option<Outcome> {
    match set_variant(&config.target, dir, args) {
        Ok(outcome) => {
            debug!(?outcome, "set finished");
            Some(outcome)
        }
        Err(e) => {
            ui.report(e.to_string());
            None
        }
    }
}

/// Print the name of the active variant
pub fn current(config: &Config, dir: &Path, ui: &Ui) -> LinkState {
    let state = classify(&config.target, dir);
    match state.active_name() {
        Some(name) => ui.println(name),
        None => ui.println(ui.dim("(uninitialized)")),
    }
    state
}
