//! Terminal renditions of the shell's pages.
//!
//! These stand in for the platform's page components. They read the session
//! through [`SessionContext`] and never enforce access; the dashboards only
//! note when the viewer's role differs from the page's audience.

use donor_application::RouteTable;
use donor_core::error::Result;
use donor_core::page::{PageHandler, PageView};
use donor_core::role::Role;
use donor_core::route::Route;
use donor_core::session::SessionContext;

struct HomePage;

impl PageHandler for HomePage {
    fn name(&self) -> &'static str {
        "home"
    }

    fn render(&self, session: &mut dyn SessionContext) -> PageView {
        let view = PageView::new(Route::Home.title())
            .line("Rewarding blood donors with NFTs, connecting hospitals and donors.");
        match (session.is_logged_in(), session.role()) {
            (true, Some(role)) => view.line(format!("Welcome back ({}).", role)),
            _ => view.line("Log in or register to get started."),
        }
    }
}

struct LoginPage;

impl PageHandler for LoginPage {
    fn name(&self) -> &'static str {
        "login"
    }

    fn render(&self, session: &mut dyn SessionContext) -> PageView {
        let view = PageView::new(Route::Login.title());
        if session.is_logged_in() {
            return view.line("You are already logged in. Use 'logout' to switch roles.");
        }
        view.line("Choose a role: government, hospital or user.")
            .line("Type 'login <role>' to continue.")
    }
}

struct RegisterPage;

impl PageHandler for RegisterPage {
    fn name(&self) -> &'static str {
        "register"
    }

    fn render(&self, _session: &mut dyn SessionContext) -> PageView {
        PageView::new(Route::Register.title())
            .line("Donors register at a partner hospital.")
            .line("Hospitals are onboarded by the government authority.")
    }
}

/// A role's landing page.
struct DashboardPage {
    route: Route,
    audience: Role,
    summary: &'static str,
}

impl PageHandler for DashboardPage {
    fn name(&self) -> &'static str {
        match self.audience {
            Role::Government => "gov-dashboard",
            Role::Hospital => "hospital-dashboard",
            Role::User => "user-dashboard",
        }
    }

    fn render(&self, session: &mut dyn SessionContext) -> PageView {
        let view = PageView::new(self.route.title()).line(self.summary);
        if session.is_logged_in() && session.role() == Some(self.audience) {
            view.line(format!("Signed in as {}.", self.audience))
        } else {
            view.line(format!("Viewing without a {} session.", self.audience))
        }
    }
}

/// A page with fixed content.
struct InfoPage {
    name: &'static str,
    route: Route,
    lines: &'static [&'static str],
}

impl PageHandler for InfoPage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self, _session: &mut dyn SessionContext) -> PageView {
        self.lines
            .iter()
            .fold(PageView::new(self.route.title()), |view, line| view.line(*line))
    }
}

/// Mounts every page at its route.
pub fn route_table() -> Result<RouteTable> {
    RouteTable::builder()
        .page(Route::Home, HomePage)
        .page(Route::Login, LoginPage)
        .page(Route::Register, RegisterPage)
        .page(
            Route::GovDashboard,
            DashboardPage {
                route: Route::GovDashboard,
                audience: Role::Government,
                summary: "Oversee hospitals and donation statistics.",
            },
        )
        .page(
            Route::HospitalDashboard,
            DashboardPage {
                route: Route::HospitalDashboard,
                audience: Role::Hospital,
                summary: "Record donations and verify donors.",
            },
        )
        .page(
            Route::UserDashboard,
            DashboardPage {
                route: Route::UserDashboard,
                audience: Role::User,
                summary: "Track your donations and NFT rewards.",
            },
        )
        .page(
            Route::VerifyDonation,
            InfoPage {
                name: "verify-donation",
                route: Route::VerifyDonation,
                lines: &["Confirm a donation record before an NFT is minted."],
            },
        )
        .page(
            Route::RedeemNft,
            InfoPage {
                name: "redeem-nft",
                route: Route::RedeemNft,
                lines: &["Exchange donation NFTs for partner rewards."],
            },
        )
        .page(
            Route::ManageHospitals,
            InfoPage {
                name: "manage-hospitals",
                route: Route::ManageHospitals,
                lines: &["Approve and review registered hospitals."],
            },
        )
        .build()
}
