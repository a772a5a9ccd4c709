//! Session store: the single owner of the current role and login flag.
//!
//! The store reads durable storage once, when it is created, and writes
//! through on every mutation. Storage failures are logged and dropped; the
//! in-memory session stays authoritative for the rest of the process.

use std::sync::Arc;

use donor_core::role::{Role, StoredRole};
use donor_core::session::{Session, SessionContext};
use donor_core::storage::{DurableStorage, IS_LOGGED_IN_KEY, LOGGED_IN_VALUE, USER_ROLE_KEY};

pub struct SessionStore {
    session: Session,
    storage: Arc<dyn DurableStorage>,
}

impl SessionStore {
    /// Restores the session from `storage`.
    ///
    /// - The login flag is set only if the stored value is exactly `"true"`.
    /// - The stored role is validated; unrecognized values become absent.
    /// - A stale role is kept even when the flag is not set.
    pub fn initialize(storage: Arc<dyn DurableStorage>) -> Self {
        let is_logged_in = match storage.get_item(IS_LOGGED_IN_KEY) {
            Ok(value) => value.as_deref() == Some(LOGGED_IN_VALUE),
            Err(e) => {
                tracing::warn!(error = %e, key = IS_LOGGED_IN_KEY, "failed to read session flag");
                false
            }
        };

        let role = match storage.get_item(USER_ROLE_KEY) {
            Ok(Some(raw)) => match Role::parse_stored(&raw) {
                StoredRole::Known(role) => Some(role),
                StoredRole::Unknown(raw) => {
                    tracing::warn!(value = %raw, "ignoring unrecognized stored role");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, key = USER_ROLE_KEY, "failed to read session role");
                None
            }
        };

        let session = Session { role, is_logged_in };
        tracing::info!(
            role = ?session.role,
            is_logged_in = session.is_logged_in,
            "session restored"
        );

        Self { session, storage }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    /// Logs in as `role` and persists both keys.
    pub fn login(&mut self, role: Role) {
        self.session = Session::logged_in(role);
        tracing::info!(%role, "logged in");

        self.persist(USER_ROLE_KEY, Some(role.as_ref()));
        self.persist(IS_LOGGED_IN_KEY, Some(LOGGED_IN_VALUE));
    }

    /// Clears the session and removes both keys. Calling it again is a no-op
    /// on observable state.
    pub fn logout(&mut self) {
        let was_logged_in = self.session.is_logged_in;
        self.session = Session::logged_out();
        if was_logged_in {
            tracing::info!("logged out");
        }

        self.persist(USER_ROLE_KEY, None);
        self.persist(IS_LOGGED_IN_KEY, None);
    }

    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(value) => self.storage.set_item(key, value),
            None => self.storage.remove_item(key),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, key, "session storage write failed; continuing in memory");
        }
    }
}

impl SessionContext for SessionStore {
    fn role(&self) -> Option<Role> {
        SessionStore::role(self)
    }

    fn is_logged_in(&self) -> bool {
        SessionStore::is_logged_in(self)
    }

    fn login(&mut self, role: Role) {
        SessionStore::login(self, role)
    }

    fn logout(&mut self) {
        SessionStore::logout(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donor_core::DonorError;
    use donor_core::error::Result;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStorage {
        items: Mutex<HashMap<String, String>>,
    }

    impl MapStorage {
        fn seeded(pairs: &[(&str, &str)]) -> Arc<Self> {
            let storage = Self::default();
            for (k, v) in pairs {
                storage.set_item(k, v).unwrap();
            }
            Arc::new(storage)
        }

        fn get(&self, key: &str) -> Option<String> {
            self.items.lock().unwrap().get(key).cloned()
        }
    }

    impl DurableStorage for MapStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.get(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.items.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// Storage where every call fails, as with disabled storage.
    struct BrokenStorage;

    impl DurableStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(DonorError::storage("storage disabled"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(DonorError::storage("quota exceeded"))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(DonorError::storage("storage disabled"))
        }
    }

    #[test]
    fn test_initialize_empty_storage_is_logged_out() {
        let store = SessionStore::initialize(MapStorage::seeded(&[]));
        assert_eq!(store.session(), Session::logged_out());
    }

    #[test]
    fn test_initialize_restores_hospital_session() {
        let storage = MapStorage::seeded(&[("userRole", "hospital"), ("isLoggedIn", "true")]);
        let store = SessionStore::initialize(storage);
        assert_eq!(store.session(), Session::logged_in(Role::Hospital));
    }

    #[test]
    fn test_initialize_flag_must_be_exactly_true() {
        for flag in ["True", "TRUE", "1", "yes", "", "true "] {
            let storage = MapStorage::seeded(&[("userRole", "user"), ("isLoggedIn", flag)]);
            let store = SessionStore::initialize(storage);
            assert!(!store.is_logged_in(), "flag {:?} should not log in", flag);
        }
    }

    #[test]
    fn test_initialize_forged_role_becomes_absent() {
        let storage = MapStorage::seeded(&[("userRole", "admin"), ("isLoggedIn", "true")]);
        let store = SessionStore::initialize(storage);
        assert_eq!(store.role(), None);
        assert!(store.is_logged_in());
        assert_eq!(store.session().dashboard_path(), "/");
    }

    #[test]
    fn test_initialize_keeps_stale_role_without_flag() {
        // Known edge case: role survives with the flag absent.
        let storage = MapStorage::seeded(&[("userRole", "government")]);
        let store = SessionStore::initialize(storage);
        assert_eq!(store.role(), Some(Role::Government));
        assert!(!store.is_logged_in());
        assert_eq!(store.session().dashboard_path(), "/gov-dashboard");
    }

    #[test]
    fn test_login_updates_memory_and_storage() {
        let storage = MapStorage::seeded(&[]);
        let mut store = SessionStore::initialize(storage.clone());

        store.login(Role::Government);

        assert_eq!(store.session(), Session::logged_in(Role::Government));
        assert_eq!(storage.get("userRole").as_deref(), Some("government"));
        assert_eq!(storage.get("isLoggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn test_login_replaces_previous_role() {
        let storage = MapStorage::seeded(&[]);
        let mut store = SessionStore::initialize(storage.clone());

        store.login(Role::User);
        store.login(Role::Hospital);

        assert_eq!(store.role(), Some(Role::Hospital));
        assert_eq!(storage.get("userRole").as_deref(), Some("hospital"));
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MapStorage::seeded(&[]);
        let mut store = SessionStore::initialize(storage.clone());
        store.login(Role::User);

        store.logout();

        assert_eq!(store.session(), Session::logged_out());
        assert_eq!(storage.get("userRole"), None);
        assert_eq!(storage.get("isLoggedIn"), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MapStorage::seeded(&[]);
        let mut store = SessionStore::initialize(storage.clone());
        store.login(Role::Hospital);

        store.logout();
        let once = store.session();
        store.logout();

        assert_eq!(store.session(), once);
        assert_eq!(storage.get("userRole"), None);
        assert_eq!(storage.get("isLoggedIn"), None);
    }

    #[test]
    fn test_logout_clears_stale_role() {
        let storage = MapStorage::seeded(&[("userRole", "government")]);
        let mut store = SessionStore::initialize(storage.clone());

        store.logout();

        assert_eq!(store.role(), None);
        assert_eq!(storage.get("userRole"), None);
    }

    #[test]
    fn test_broken_storage_never_reaches_caller() {
        let mut store = SessionStore::initialize(Arc::new(BrokenStorage));
        assert_eq!(store.session(), Session::logged_out());

        store.login(Role::User);
        assert_eq!(store.session(), Session::logged_in(Role::User));

        store.logout();
        assert_eq!(store.session(), Session::logged_out());
    }

    #[test]
    fn test_session_context_delegates() {
        let storage = MapStorage::seeded(&[]);
        let mut store = SessionStore::initialize(storage.clone());
        let ctx: &mut dyn SessionContext = &mut store;

        ctx.login(Role::Hospital);
        assert_eq!(ctx.role(), Some(Role::Hospital));
        assert!(ctx.is_logged_in());

        ctx.logout();
        assert!(!ctx.is_logged_in());
        assert_eq!(storage.get("isLoggedIn"), None);
    }
}
