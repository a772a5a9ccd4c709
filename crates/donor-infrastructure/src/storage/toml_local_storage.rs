//! File-backed local storage.
//!
//! Persists string key-value pairs as a flat TOML table:
//!
//! ```toml
//! isLoggedIn = "true"
//! userRole = "hospital"
//! ```
//!
//! Entries are read as raw TOML values. A non-string entry reads as absent
//! and is overwritten by the next write to its key.

use std::collections::BTreeMap;
use std::path::PathBuf;

use donor_core::error::Result;
use donor_core::storage::DurableStorage;

use super::atomic_toml::AtomicTomlFile;
use crate::paths::DonorPaths;

type Items = BTreeMap<String, toml::Value>;

/// [`DurableStorage`] over a single TOML file.
///
/// Every call goes to disk; there is no in-process cache, so a value written
/// by another process is visible on the next read.
pub struct TomlLocalStorage {
    file: AtomicTomlFile<Items>,
}

impl TomlLocalStorage {
    /// Storage at the default location under the platform config directory.
    pub fn new() -> Result<Self> {
        let path = DonorPaths::local_storage_file()?;
        Ok(Self::with_path(path))
    }

    /// Storage at an explicit path. The file and its parent directories are
    /// created on first write.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl DurableStorage for TomlLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.file.load()?.unwrap_or_default();
        let Some(value) = items.get(key) else {
            return Ok(None);
        };
        match value.as_str() {
            Some(text) => Ok(Some(text.to_string())),
            None => {
                tracing::warn!(key, kind = value.type_str(), "ignoring non-string storage item");
                Ok(None)
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Items::new(), |items| {
            items.insert(key.to_string(), toml::Value::String(value.to_string()));
            Ok(())
        })?;
        tracing::debug!(key, path = %self.path().display(), "storage item written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if !self.path().exists() {
            return Ok(());
        }
        self.file.update(Items::new(), |items| {
            items.remove(key);
            Ok(())
        })?;
        tracing::debug!(key, path = %self.path().display(), "storage item removed");
        Ok(())
    }
}
