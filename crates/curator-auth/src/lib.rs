//! # curator-auth
//!
//! Session management and access decisions for the Curator client.
//!
//! Two cooperating pieces:
//!
//! - **Session Manager** ([`SessionStore`]): owns the single process-wide
//!   session value, derives role and expiry by decoding the bearer
//!   credential's claims, persists the credential to a versioned JSON file,
//!   and exposes `restore` / `login` / `logout` / `invalidate`.
//! - **Access Guard** ([`guard`]): maps the current session snapshot and a
//!   view's allowed roles to a [`Decision`]: render, redirect to login, or
//!   redirect to the default landing view.
//!
//! Everything fails closed: a missing, expired, or undecodable credential is
//! treated as "logged out", never as an error surfaced to views and never as
//! a default role.

#![deny(unsafe_code)]

pub mod claims;
pub mod errors;
pub mod guard;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use claims::{PrincipalClaims, TokenClaims, decode_claims};
pub use errors::AuthError;
pub use guard::{Decision, guard};
pub use session::{Session, SessionStore};
pub use storage::{clear_credential, credential_file_path, load_credential, save_credential};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
