//! Navigation affordances derived from the session.

use serde::{Deserialize, Serialize};

use crate::route::{Route, dashboard_route};
use crate::session::Session;

/// Brand name shown in the navigation bar and footer.
pub const BRAND_NAME: &str = "BloodDonorNFT";

/// An entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "to")]
pub enum NavAction {
    Home,
    Login,
    Register,
    /// Link to the dashboard of the session's role.
    Dashboard(Route),
    Logout,
}

impl NavAction {
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Home => "Home",
            NavAction::Login => "Login",
            NavAction::Register => "Register",
            NavAction::Dashboard(_) => "Dashboard",
            NavAction::Logout => "Logout",
        }
    }

    /// Target route for link actions. `Logout` is a button, not a link.
    pub fn target(&self) -> Option<Route> {
        match self {
            NavAction::Home => Some(Route::Home),
            NavAction::Login => Some(Route::Login),
            NavAction::Register => Some(Route::Register),
            NavAction::Dashboard(route) => Some(*route),
            NavAction::Logout => None,
        }
    }
}

/// Navigation bar entries for a session, in display order.
///
/// Only the login flag selects the set; the dashboard target comes from the
/// stored role.
pub fn visible_actions(session: &Session) -> Vec<NavAction> {
    if session.is_logged_in {
        vec![
            NavAction::Home,
            NavAction::Dashboard(dashboard_route(session.role)),
            NavAction::Logout,
        ]
    } else {
        vec![NavAction::Home, NavAction::Login, NavAction::Register]
    }
}

/// Footer quick links. Shown in every session state.
pub fn footer_links() -> [Route; 3] {
    [Route::Home, Route::Login, Route::Register]
}

/// Footer contact lines.
pub const FOOTER_CONTACT: [&str; 2] = ["info@blooddonornft.com", "+1 (555) 123-4567"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn test_logged_out_shows_home_login_register() {
        let actions = visible_actions(&Session::logged_out());
        assert_eq!(
            actions,
            vec![NavAction::Home, NavAction::Login, NavAction::Register]
        );
    }

    #[test]
    fn test_logged_in_user_shows_dashboard_and_logout() {
        let actions = visible_actions(&Session::logged_in(Role::User));
        assert_eq!(
            actions,
            vec![
                NavAction::Home,
                NavAction::Dashboard(Route::UserDashboard),
                NavAction::Logout,
            ]
        );
    }

    #[test]
    fn test_dashboard_link_follows_role() {
        let actions = visible_actions(&Session::logged_in(Role::Government));
        assert_eq!(actions[1].target(), Some(Route::GovDashboard));
        assert_eq!(actions[1].label(), "Dashboard");
    }

    #[test]
    fn test_stale_role_with_flag_cleared_shows_logged_out_set() {
        let session = Session {
            role: Some(Role::Government),
            is_logged_in: false,
        };
        assert_eq!(
            visible_actions(&session),
            vec![NavAction::Home, NavAction::Login, NavAction::Register]
        );
    }

    #[test]
    fn test_logout_has_no_target() {
        assert_eq!(NavAction::Logout.target(), None);
    }

    #[test]
    fn test_footer_links_are_constant() {
        assert_eq!(
            footer_links(),
            [Route::Home, Route::Login, Route::Register]
        );
    }
}
