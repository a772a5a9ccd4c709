//! Path management for shell files.
//!
//! ```text
//! ~/.config/blood-donor-nft/     # Config directory (platform specific)
//! ├── config.toml                # Shell configuration
//! ├── storage.toml               # Durable session storage
//! └── logs/                      # Application logs
//!     └── donor-shell.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;
use thiserror::Error;

use donor_core::DonorError;

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "blood-donor-nft";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Cannot determine the platform config directory")]
    ConfigDirNotFound,
}

impl From<PathError> for DonorError {
    fn from(err: PathError) -> Self {
        DonorError::config(err.to_string())
    }
}

pub struct DonorPaths;

impl DonorPaths {
    /// Platform config directory with [`APP_DIR_NAME`] appended,
    /// e.g. `~/.config/blood-donor-nft` on Linux.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default location of the durable session storage.
    pub fn local_storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("storage.toml"))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        // Headless CI may have no config dir at all.
        let Ok(config_dir) = DonorPaths::config_dir() else {
            return;
        };
        assert!(config_dir.ends_with(APP_DIR_NAME));

        let config_file = DonorPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(&config_dir));

        let storage_file = DonorPaths::local_storage_file().unwrap();
        assert!(storage_file.ends_with("storage.toml"));
        assert!(storage_file.starts_with(&config_dir));

        let logs_dir = DonorPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(&config_dir));
    }

    #[test]
    fn test_path_error_maps_to_config_error() {
        let err: DonorError = PathError::ConfigDirNotFound.into();
        assert!(err.is_config());
    }
}
