//! Exportable application configuration.
//!
//! The engine itself holds no files; import and export operate on JSON
//! strings supplied by the embedding application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keymap::KeyMap;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Errors from importing a configuration string.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload failed to parse.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The config was written by a newer, incompatible version.
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
}

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Format version for compatibility checks.
    pub version: u32,
    /// Logging verbosity.
    #[serde(default)]
    pub log_level: LogLevel,
    /// Key-to-slider bindings.
    #[serde(default)]
    pub keymap: KeyMap,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            keymap: KeyMap::default(),
        }
    }
}

impl AppConfig {
    /// Serialize to a pretty JSON string for export.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an exported configuration, rejecting newer format versions.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }
        Ok(config)
    }
}
