//! Auth error types.

use thiserror::Error;

/// Errors that can occur during session operations.
///
/// Views never see these: `restore` resolves failures to an absent session,
/// and `login` failures surface as the caller's inline "invalid credentials"
/// state. The variants exist so the session store can distinguish what to
/// log and what to erase.
#[derive(Debug, Error)]
pub enum AuthError {
    /// File I/O error while persisting or erasing the credential.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credential claims could not be decoded against the expected schema.
    #[error("malformed credential: {0}")]
    InvalidCredential(String),

    /// Credential decoded cleanly but its expiry has already passed.
    #[error("credential is expired")]
    ExpiredCredential,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
