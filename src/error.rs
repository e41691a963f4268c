//! Error types for configuration and link operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while resolving the target configuration. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target file is not set.")]
    TargetNotSet,

    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("fatal error in config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// OS-level failures reported by the switch executor.
///
/// None of these change the exit status of the CLI; they are printed and the
/// command ends.
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("link {} {}: {source}", .src.display(), .dst.display())]
    Link {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rename {} {}: {source}", .src.display(), .dst.display())]
    Rename {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("open {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
