use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::git::repository::DEFAULT_REMOTE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// User configuration, read from `~/.config/gitsync/config.toml`.
///
/// Every section is optional; anything left out takes its default.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub git: GitConfig,
    pub behavior: BehaviorConfig,
    pub quick_push: QuickPushConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    /// Remote whose branch the local branch is compared against
    pub remote: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Ask before stashing a dirty tree; when false the tree is left alone
    pub confirm_stash: bool,
    pub log_commands: bool,
}

/// The file and message committed by `quick-push`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuickPushConfig {
    pub file: String,
    pub message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            confirm_stash: true,
            log_commands: true,
        }
    }
}

impl Default for QuickPushConfig {
    fn default() -> Self {
        Self {
            file: "email_slicer.py".to_string(),
            message: "Adding email_slicer.py".to_string(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("gitsync"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(ConfigError::DirectoryNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML contents
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.git.remote.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "git.remote must not be empty".to_string(),
            ));
        }

        if self.git.remote.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "git.remote contains whitespace: '{}'",
                self.git.remote
            )));
        }

        if self.quick_push.file.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "quick_push.file must not be empty".to_string(),
            ));
        }

        if self.quick_push.message.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "quick_push.message must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
