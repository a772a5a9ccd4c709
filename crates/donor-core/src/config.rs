//! Shell configuration model.
//!
//! Loaded from `config.toml`. Every field has a default, so an absent or
//! partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageSettings {
    /// Location of the durable storage file. Defaults to the platform config
    /// directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Keep the session in memory only.
    #[serde(default)]
    pub ephemeral: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive for the console and file loggers, e.g. `info` or
    /// `donor_application=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Also write a daily-rolling log file into the logs directory.
    #[serde(default)]
    pub file: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: false,
        }
    }
}
