//! View models, one per page.
//!
//! Each view owns its fetch state and exposes async operations that suspend
//! only at network boundaries. Operations follow the crate convention:
//! retryable failures are recorded inline in the view's own state
//! (`Ok(())`), and only `ApiError::SessionInvalid` propagates as `Err` for
//! the shell to route through [`App::on_session_invalid`].
//!
//! [`App::on_session_invalid`]: crate::app::App::on_session_invalid

pub mod approvals;
pub mod auth;
pub mod moderation;
pub mod submissions;
pub mod submit;

pub use approvals::ApprovalsView;
pub use auth::AuthView;
pub use moderation::ModerationView;
pub use submissions::SubmissionsView;
pub use submit::SubmitView;
