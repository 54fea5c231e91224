//! # curator-app
//!
//! The layer a rendering frontend binds to.
//!
//! - [`Route`]: the navigable views and their declared allowed roles
//! - [`App`]: session restore, login/logout, and guard-checked navigation
//! - [`Fetch`] / [`ViewState`]: per-view fetch state with loading,
//!   last-known-good retention on failure, and a stale-response guard
//! - [`views`]: one view model per page: own submissions, the submission
//!   form, the approvals queue, the moderation dashboard, and auth
//!
//! Control flow: the guard consults a fresh session snapshot before any
//! protected view mounts; views issue requests scoped by the session the
//! store provides; the frontend re-renders from the returned state.
//!
//! The convention for view operations: retryable failures are recorded in
//! the view's own state and the method returns `Ok(())`; only
//! [`ApiError::SessionInvalid`] propagates as `Err`, and the shell routes it
//! through [`App::on_session_invalid`], the same path as expiry detection.
//!
//! [`ApiError::SessionInvalid`]: curator_client::ApiError::SessionInvalid

#![deny(unsafe_code)]

pub mod app;
pub mod logging;
pub mod routes;
pub mod view;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use logging::init_subscriber;
pub use routes::Route;
pub use view::{Fetch, FetchTicket, ViewState};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _route = Route::Dashboard;
        let _state: ViewState<()> = ViewState::Idle;
    }
}
