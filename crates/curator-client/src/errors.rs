//! Content service error types.

use thiserror::Error;

/// Errors surfaced by [`ContentClient`] operations.
///
/// Each call reports its own error to the initiating view; nothing here is
/// global or fatal. [`ApiError::is_retryable`] tells a view whether to offer
/// a retry or to hand the failure to the session layer.
///
/// [`ContentClient`]: crate::client::ContentClient
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required field was empty. Raised before any network call.
    #[error("required field is empty: {field}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The server declined the login credentials. Session state unchanged.
    #[error("invalid credentials")]
    CredentialsRejected,

    /// The server answered 401/403 to an authorized call; the credential
    /// is no longer accepted. Handled like expiry detection.
    #[error("session is no longer valid")]
    SessionInvalid,

    /// The server rejected the request for any other reason.
    #[error("request failed ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },
}

impl ApiError {
    /// Whether retrying the same call can succeed without other action.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
