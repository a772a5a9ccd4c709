//! Loads the shell configuration file.

use std::path::PathBuf;

use donor_core::config::ShellConfig;
use donor_core::error::Result;

use crate::paths::DonorPaths;
use crate::storage::AtomicTomlFile;

/// Reads `config.toml`, falling back to defaults when the file is missing.
pub struct ConfigService {
    file: AtomicTomlFile<ShellConfig>,
}

impl ConfigService {
    /// Config at the default location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(DonorPaths::config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Loads the config. A missing or blank file yields the defaults; a
    /// malformed one is an error.
    pub fn load(&self) -> Result<ShellConfig> {
        match self.file.load()? {
            Some(config) => {
                tracing::debug!(path = %self.file.path().display(), "loaded shell config");
                Ok(config)
            }
            None => Ok(ShellConfig::default()),
        }
    }
}
