//! In-memory storage for ephemeral shells and tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use donor_core::DonorError;
use donor_core::error::Result;
use donor_core::storage::DurableStorage;

/// [`DurableStorage`] that lives only as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| DonorError::storage(format!("Memory storage poisoned: {}", e)))
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
