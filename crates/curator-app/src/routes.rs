//! Navigable views and their role requirements.
//!
//! Role gating is declared here, in one place, and enforced by the access
//! guard on every navigation; views never compare role strings themselves.

use curator_auth::Session;
use curator_core::Role;

/// A navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated entry view.
    Login,
    /// Account creation.
    Signup,
    /// Default landing view for any authenticated role.
    Dashboard,
    /// Contributor submission form.
    Submit,
    /// Moderator approvals queue.
    Approvals,
}

impl Route {
    /// URL-style path, for display and history integration.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Submit => "/submit",
            Self::Approvals => "/approvals",
        }
    }

    /// Whether the view is reachable without a session.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// Roles permitted to mount this view.
    ///
    /// Public routes carry no role requirement. `Dashboard` admits both
    /// roles; the view it shows differs by role, but that is the view's
    /// concern, not the router's.
    #[must_use]
    pub const fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Login | Self::Signup => &[],
            Self::Dashboard => &[Role::Contributor, Role::Moderator],
            Self::Submit => &[Role::Contributor],
            Self::Approvals => &[Role::Moderator],
        }
    }
}

/// Routes to offer in the navigation header for the current session.
///
/// Derived from the same role data the guard checks, so the offered links
/// and the reachable views can never disagree.
#[must_use]
pub fn nav_items(session: Option<&Session>) -> Vec<Route> {
    match session.map(|s| s.role) {
        None => vec![Route::Login, Route::Signup],
        Some(Role::Contributor) => vec![Route::Submit, Route::Dashboard],
        Some(Role::Moderator) => vec![Route::Approvals, Route::Dashboard],
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
