//! The fixed route surface of the shell.
//!
//! Nine client-side paths, each served by exactly one page. The set is static
//! for the life of the process and does not depend on the session.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::role::Role;

/// A path the shell can dispatch. `Route::iter()` yields them in navigation
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Register,
    GovDashboard,
    HospitalDashboard,
    UserDashboard,
    VerifyDonation,
    RedeemNft,
    ManageHospitals,
}

impl Route {
    /// The path string for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::GovDashboard => "/gov-dashboard",
            Route::HospitalDashboard => "/hospital-dashboard",
            Route::UserDashboard => "/user-dashboard",
            Route::VerifyDonation => "/verify-donation",
            Route::RedeemNft => "/redeem-nft",
            Route::ManageHospitals => "/manage-hospitals",
        }
    }

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::GovDashboard => "Government Dashboard",
            Route::HospitalDashboard => "Hospital Dashboard",
            Route::UserDashboard => "Donor Dashboard",
            Route::VerifyDonation => "Verify Donation",
            Route::RedeemNft => "Redeem NFT",
            Route::ManageHospitals => "Manage Hospitals",
        }
    }

    /// Looks up a route by exact path. Returns `None` for anything outside the
    /// nine fixed paths.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::iter().find(|route| route.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Landing route for a role. Absent maps to [`Route::Home`].
pub fn dashboard_route(role: Option<Role>) -> Route {
    match role {
        Some(Role::Government) => Route::GovDashboard,
        Some(Role::Hospital) => Route::HospitalDashboard,
        Some(Role::User) => Route::UserDashboard,
        None => Route::Home,
    }
}

/// Landing path for a role. Total over all four cases and free of side effects.
pub fn dashboard_path(role: Option<Role>) -> &'static str {
    dashboard_route(role).path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dashboard_path_for_each_role() {
        assert_eq!(dashboard_path(Some(Role::Government)), "/gov-dashboard");
        assert_eq!(dashboard_path(Some(Role::Hospital)), "/hospital-dashboard");
        assert_eq!(dashboard_path(Some(Role::User)), "/user-dashboard");
    }

    #[test]
    fn test_dashboard_path_absent_is_root() {
        assert_eq!(dashboard_path(None), "/");
    }

    #[test]
    fn test_dashboard_path_for_unrecognized_stored_role_is_root() {
        for raw in ["admin", "GOVERNMENT", "", "hospital "] {
            let role = Role::parse_stored(raw).into_role();
            assert_eq!(dashboard_path(role), "/", "raw value {:?}", raw);
        }
    }

    #[test]
    fn test_from_path_round_trips_every_route() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_rejects_unknown() {
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path("/login/"), None);
        assert_eq!(Route::from_path(""), None);
    }
}
