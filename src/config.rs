//! Tracked-repository configuration
//!
//! The config file is a TOML document listing the git-hosted
//! dependencies to check:
//!
//! ```toml
//! [[repos]]
//! name = "github.com/example/lib"
//! repo_url = "https://github.com/example/lib"
//! token = "optional-access-token"
//! ```
//!
//! Entry order is preserved and drives the report ordering. A repo's
//! `name` must be spelled exactly as the manifest declares the
//! dependency.

use crate::domain::TrackedRepository;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default config filename, looked up in the target directory
pub const DEFAULT_CONFIG_FILE: &str = ".depfresh.toml";

/// Parsed configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Tracked repositories, in file order
    #[serde(default)]
    pub repos: Vec<TrackedRepository>,
}

/// Loads and parses the config file at `path`
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
