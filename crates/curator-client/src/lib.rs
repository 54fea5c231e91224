//! # curator-client
//!
//! HTTP client for the Curator content service.
//!
//! [`ContentClient`] issues the requests the client core depends on:
//! login/signup, the role-scoped listings, aggregate stats, submission, and
//! the approve/reject transitions. Every authorized request carries the
//! bearer credential passed by the caller; the client owns no credential
//! state of its own; the session store stays the single source of truth.
//!
//! Failure semantics: a 401/403 on any authorized call is
//! [`ApiError::SessionInvalid`] (the caller routes it through session
//! invalidation, the same path as expiry detection); other non-2xx responses
//! and transport failures are retryable, surfaced per-call, and never mutate
//! local state to reflect an assumed outcome.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;
pub mod types;

pub use client::ContentClient;
pub use errors::ApiError;
pub use types::{LoginRequest, LoginResponse, SubmitRequest};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _client = ContentClient::new("http://localhost:5000/api");
        let _err = ApiError::SessionInvalid;
    }
}
