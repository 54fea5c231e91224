//! Role-based access decisions for protected views.

use curator_core::Role;

use crate::session::Session;

/// Outcome of guarding a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The view may mount.
    Render,
    /// No authenticated session; send to the login view.
    RedirectToLogin,
    /// Authenticated, but the role is not permitted; send to the default
    /// landing view.
    RedirectToDefault,
}

/// Decide whether a session may reach a view restricted to `allowed` roles.
///
/// The authentication check strictly precedes the role check: an
/// unauthenticated principal is always sent to login, never to the
/// default-role redirect. An empty `allowed` set means "any authenticated
/// role".
///
/// Call this with a fresh [`SessionStore::snapshot`] on every navigation;
/// decisions are never cached, and the snapshot path already reports an
/// expired session as absent.
///
/// The decision is a UX affordance only; the content service independently
/// authorizes every request.
///
/// [`SessionStore::snapshot`]: crate::session::SessionStore::snapshot
#[must_use]
pub fn guard(session: Option<&Session>, allowed: &[Role]) -> Decision {
    let Some(session) = session else {
        return Decision::RedirectToLogin;
    };
    if !allowed.is_empty() && !allowed.contains(&session.role) {
        return Decision::RedirectToDefault;
    }
    Decision::Render
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
