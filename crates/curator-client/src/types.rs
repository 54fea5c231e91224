//! Request/response envelopes for the content service.
//!
//! Record and stats payloads deserialize straight into the `curator-core`
//! types; only the auth and submission envelopes live here.

use serde::{Deserialize, Serialize};

/// `POST /auth/login` and `POST /auth/signup` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// `POST /auth/login` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// The issued bearer credential.
    pub token: String,
}

/// `POST /content` request body.
#[derive(Clone, Debug, Serialize)]
pub struct SubmitRequest {
    /// Record title.
    pub title: String,
    /// Record description.
    pub description: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
