//! Shell controller: navigation gating and path dispatch.
//!
//! The controller holds no session state of its own. Every call re-derives
//! what to show from the session it is handed.

use std::collections::HashMap;

use donor_core::error::{DonorError, Result};
use donor_core::navigation::{NavAction, visible_actions};
use donor_core::page::{PageHandler, PageView};
use donor_core::role::Role;
use donor_core::route::{Route, dashboard_path};
use donor_core::session::{Session, SessionContext};
use strum::IntoEnumIterator;

/// Fixed mapping from each [`Route`] to its page.
pub struct RouteTable {
    pages: HashMap<Route, Box<dyn PageHandler>>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The page mounted at `route`. Every route has one once the table is
    /// built.
    pub fn page(&self, route: Route) -> Option<&dyn PageHandler> {
        self.pages.get(&route).map(|page| page.as_ref())
    }
}

#[derive(Default)]
pub struct RouteTableBuilder {
    pages: HashMap<Route, Box<dyn PageHandler>>,
}

impl RouteTableBuilder {
    /// Mounts `page` at `route`, replacing any earlier page for that route.
    pub fn page(mut self, route: Route, page: impl PageHandler + 'static) -> Self {
        self.pages.insert(route, Box::new(page));
        self
    }

    /// Builds the table. Fails if any of the nine routes has no page.
    pub fn build(self) -> Result<RouteTable> {
        let missing: Vec<&str> = Route::iter()
            .filter(|route| !self.pages.contains_key(route))
            .map(Route::path)
            .collect();

        if !missing.is_empty() {
            return Err(DonorError::config(format!(
                "No page registered for: {}",
                missing.join(", ")
            )));
        }

        Ok(RouteTable { pages: self.pages })
    }
}

/// Drives navigation for one shell instance.
pub struct ShellController {
    routes: RouteTable,
    current_path: String,
}

impl ShellController {
    /// Starts at `/`.
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes,
            current_path: Route::Home.path().to_string(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Navigation bar entries for `session`.
    pub fn visible_actions(&self, session: &Session) -> Vec<NavAction> {
        visible_actions(session)
    }

    pub fn dashboard_path(&self, role: Option<Role>) -> &'static str {
        dashboard_path(role)
    }

    /// Page for `path`, or `None` outside the nine fixed paths.
    ///
    /// No authorization is applied: any session can reach any page by path.
    pub fn dispatch(&self, path: &str) -> Option<&dyn PageHandler> {
        Route::from_path(path).and_then(|route| self.routes.page(route))
    }

    /// Moves to `path` and renders it.
    ///
    /// The current path changes even when nothing matches, in which case the
    /// content area is empty and `RouteNotFound` is returned.
    pub fn navigate(&mut self, path: &str, session: &mut dyn SessionContext) -> Result<PageView> {
        self.current_path = path.to_string();
        self.render_current(session)
    }

    /// Renders whatever is mounted at the current path.
    pub fn render_current(&self, session: &mut dyn SessionContext) -> Result<PageView> {
        let page = self
            .dispatch(&self.current_path)
            .ok_or_else(|| DonorError::route_not_found(self.current_path.clone()))?;

        tracing::debug!(path = %self.current_path, page = page.name(), "dispatching");
        Ok(page.render(session))
    }

    /// Applies a navigation bar entry.
    ///
    /// Links navigate to their target. `Logout` clears the session and
    /// re-renders the current path without navigating.
    pub fn activate(
        &mut self,
        action: NavAction,
        session: &mut dyn SessionContext,
    ) -> Result<PageView> {
        match action.target() {
            Some(route) => self.navigate(route.path(), session),
            None => {
                session.logout();
                self.render_current(session)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedPage(&'static str);

    impl PageHandler for NamedPage {
        fn name(&self) -> &'static str {
            self.0
        }

        fn render(&self, session: &mut dyn SessionContext) -> PageView {
            PageView::new(self.0).line(format!("logged_in={}", session.is_logged_in()))
        }
    }

    #[derive(Default)]
    struct FakeSession(Session);

    impl SessionContext for FakeSession {
        fn role(&self) -> Option<Role> {
            self.0.role
        }

        fn is_logged_in(&self) -> bool {
            self.0.is_logged_in
        }

        fn login(&mut self, role: Role) {
            self.0 = Session::logged_in(role);
        }

        fn logout(&mut self) {
            self.0 = Session::logged_out();
        }
    }

    fn full_table() -> RouteTable {
        Route::iter()
            .fold(RouteTable::builder(), |builder, route| {
                builder.page(route, NamedPage(route.title()))
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_rejects_missing_pages() {
        let err = RouteTable::builder()
            .page(Route::Home, NamedPage("home"))
            .build()
            .err()
            .unwrap();
        assert!(err.is_config());
        assert!(err.to_string().contains("/manage-hospitals"));
        assert!(!err.to_string().contains("/, "));
    }

    #[test]
    fn test_dispatch_every_fixed_path() {
        let shell = ShellController::new(full_table());
        for route in Route::iter() {
            let page = shell.dispatch(route.path()).unwrap();
            assert_eq!(page.name(), route.title());
        }
    }

    #[test]
    fn test_dispatch_unknown_path() {
        let shell = ShellController::new(full_table());
        assert!(shell.dispatch("/admin").is_none());
    }

    #[test]
    fn test_gov_dashboard_reachable_without_government_role() {
        let mut shell = ShellController::new(full_table());
        let mut session = FakeSession::default();
        session.login(Role::User);

        let view = shell.navigate("/gov-dashboard", &mut session).unwrap();
        assert_eq!(view.title, "Government Dashboard");
    }

    #[test]
    fn test_navigate_unknown_path_keeps_path_and_errors() {
        let mut shell = ShellController::new(full_table());
        let mut session = FakeSession::default();

        let err = shell.navigate("/nowhere", &mut session).unwrap_err();
        assert!(err.is_route_not_found());
        assert_eq!(shell.current_path(), "/nowhere");
    }

    #[test]
    fn test_activate_dashboard_link_navigates() {
        let mut shell = ShellController::new(full_table());
        let mut session = FakeSession::default();
        session.login(Role::Hospital);

        let actions = shell.visible_actions(&session.0);
        let view = shell.activate(actions[1], &mut session).unwrap();

        assert_eq!(shell.current_path(), "/hospital-dashboard");
        assert_eq!(view.title, "Hospital Dashboard");
    }

    #[test]
    fn test_activate_logout_stays_on_current_path() {
        let mut shell = ShellController::new(full_table());
        let mut session = FakeSession::default();
        session.login(Role::User);
        shell.navigate("/redeem-nft", &mut session).unwrap();

        let view = shell.activate(NavAction::Logout, &mut session).unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(shell.current_path(), "/redeem-nft");
        assert_eq!(view.lines, vec!["logged_in=false"]);
        assert_eq!(
            shell.visible_actions(&session.0),
            vec![NavAction::Home, NavAction::Login, NavAction::Register]
        );
    }

    #[test]
    fn test_dashboard_path_delegates() {
        let shell = ShellController::new(full_table());
        assert_eq!(shell.dashboard_path(Some(Role::User)), "/user-dashboard");
        assert_eq!(shell.dashboard_path(None), "/");
    }
}
