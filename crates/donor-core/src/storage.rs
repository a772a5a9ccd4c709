//! Durable key-value storage trait.

use crate::error::Result;

/// Storage key holding the role string.
pub const USER_ROLE_KEY: &str = "userRole";

/// Storage key holding the login flag. Only the exact value `"true"` counts
/// as logged in.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Value written under [`IS_LOGGED_IN_KEY`] on login.
pub const LOGGED_IN_VALUE: &str = "true";

/// Client-local string key-value store that survives restarts.
///
/// Each call touches a single key. Implementations are not expected to
/// synchronize with other processes sharing the same backing store.
pub trait DurableStorage: Send + Sync {
    /// Reads a key. `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Writes a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a key. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}
