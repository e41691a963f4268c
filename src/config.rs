use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default config file, looked up relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "FileSwitcher.yaml";

/// Contents of FileSwitcher.yaml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub target: Option<String>,
}

impl ConfigFile {
    /// Read the config file, returning the default if it doesn't exist
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The path that gets relinked to variants
    pub target: PathBuf,
}

impl Config {
    /// Resolve the target: a non-empty `--target` flag wins over the config
    /// file, and having neither is an error.
    pub fn load(config_file: &Path, target_flag: Option<&str>) -> Result<Self, ConfigError> {
        let target = match target_flag.filter(|flag| !flag.is_empty()) {
            Some(flag) => flag.to_string(),
            None => ConfigFile::read(config_file)?
                .target
                .filter(|t| !t.is_empty())
                .ok_or(ConfigError::TargetNotSet)?,
        };

        Ok(Self {
            target: from_slash(&target),
        })
    }
}

/// Convert `/` separators to the platform separator
fn from_slash(path: &str) -> PathBuf {
    if std::path::MAIN_SEPARATOR == '/' {
        PathBuf::from(path)
    } else {
        PathBuf::from(path.replace('/', std::path::MAIN_SEPARATOR_STR))
    }
}
