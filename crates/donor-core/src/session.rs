//! Session model and the context contract published to pages.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::route::dashboard_path;

/// The pair of current role and login flag.
///
/// `login` always produces a role together with `is_logged_in = true`. A role
/// restored from storage may coexist with `is_logged_in = false`; that state is
/// kept as-is rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Option<Role>,
    pub is_logged_in: bool,
}

impl Session {
    /// A session with no role and the login flag cleared.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// A session logged in as `role`.
    pub fn logged_in(role: Role) -> Self {
        Self {
            role: Some(role),
            is_logged_in: true,
        }
    }

    /// Dashboard path for the stored role.
    ///
    /// Derived from the role alone; the login flag is not consulted.
    pub fn dashboard_path(&self) -> &'static str {
        dashboard_path(self.role)
    }
}

/// What the shell exposes to page handlers.
///
/// Pages may read the role and login flag and may call `login`/`logout`, but
/// have no way to write session fields directly.
pub trait SessionContext {
    fn role(&self) -> Option<Role>;

    fn is_logged_in(&self) -> bool;

    fn login(&mut self, role: Role);

    fn logout(&mut self);
}
