#![forbid(unsafe_code)]

//! TOML description of an application's version and help metadata
//!
//! ```toml
//! [app]
//! name = "Application name"
//! version = "1.0.0"
//! description = "Application description"
//!
//! [usage]
//! exe_name = "AppExec"
//! pattern = "-f <file_path> [OPTIONS]"
//!
//! [usage.options]
//! "-h, --help" = "show help message"
//! ```
//!
//! Every table and field is optional and defaults to empty.

use crate::parser::{AppInfo, CmdLineParser, UsageInfo};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading or writing a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a valid configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application metadata loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub app: AppInfo,
    pub usage: UsageInfo,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded config from {}", path.display());
        Self::parse(&content)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Copy the metadata into `parser`, replacing what it held
    pub fn apply(&self, parser: &mut CmdLineParser) {
        parser.set_app_info(self.app.clone());
        parser.set_usage_info(self.usage.clone());
    }
}
