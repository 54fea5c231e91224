//! Application shell: session wiring and guard-checked navigation.

use curator_auth::{Decision, Session, SessionStore, guard};
use curator_client::ContentClient;
use curator_settings::Settings;

use crate::routes::{Route, nav_items};

/// The application shell a frontend drives.
///
/// Owns the session store and the content client, and resolves every
/// navigation through the access guard against a fresh session snapshot;
/// decisions are never cached, so a logout immediately invalidates any
/// previously rendered protected view.
pub struct App {
    sessions: SessionStore,
    client: ContentClient,
    route: Route,
}

impl App {
    /// Build the shell from settings. No I/O happens until
    /// [`App::start`] or a view operation.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            sessions: SessionStore::new(&settings.storage.resolve_data_dir()),
            client: ContentClient::new(settings.api.base_url.clone()),
            route: Route::Login,
        }
    }

    /// Cold start: restore a persisted session, then land on the dashboard
    /// (authenticated) or login (not).
    pub fn start(&mut self) -> Route {
        let _ = self.sessions.restore();
        self.navigate(Route::Dashboard)
    }

    /// Navigate, resolving the guard against a fresh snapshot.
    ///
    /// Returns the route actually landed on: a role mismatch lands on the
    /// dashboard, a missing session on login, and an already-authenticated
    /// principal asking for login/signup is sent to the dashboard.
    pub fn navigate(&mut self, target: Route) -> Route {
        let snapshot = self.sessions.snapshot();
        let landed = if target.is_public() {
            if snapshot.is_some() {
                Route::Dashboard
            } else {
                target
            }
        } else {
            match guard(snapshot.as_ref(), target.allowed_roles()) {
                Decision::Render => target,
                Decision::RedirectToLogin => Route::Login,
                Decision::RedirectToDefault => Route::Dashboard,
            }
        };
        if landed != target {
            tracing::debug!(from = target.path(), to = landed.path(), "redirected");
        }
        self.route = landed;
        landed
    }

    /// Log out and land on the login view. Idempotent.
    pub fn logout(&mut self) -> Route {
        self.sessions.logout();
        self.navigate(Route::Login)
    }

    /// Handle a server-declined credential (401/403 on any call): destroy
    /// the session (the same path as expiry detection) and land on login.
    pub fn on_session_invalid(&mut self) -> Route {
        self.sessions.invalidate();
        self.navigate(Route::Login)
    }

    /// The currently mounted route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// A fresh, consistent session snapshot.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.sessions.snapshot()
    }

    /// The session store (the only writer of session state).
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// The content service client.
    #[must_use]
    pub const fn client(&self) -> &ContentClient {
        &self.client
    }

    /// Navigation links to offer for the current session.
    #[must_use]
    pub fn nav_items(&self) -> Vec<Route> {
        nav_items(self.sessions.snapshot().as_ref())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
