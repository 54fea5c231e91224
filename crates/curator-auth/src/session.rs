//! The process-wide session value and its lifecycle.
//!
//! All session mutations flow through [`SessionStore`]; no other component
//! writes session state. Readers take [`SessionStore::snapshot`] and always
//! observe a consistent value, never a half-updated role/credential pair.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use curator_core::Role;

use crate::errors::AuthError;
use crate::storage;

/// An authenticated session derived from a bearer credential.
///
/// Role, identity, and expiry come exclusively from the credential's
/// claims; the struct exists so views don't re-decode the token on every
/// read.
#[derive(Clone, Debug)]
pub struct Session {
    /// The opaque bearer token sent with every authorized request.
    pub token: String,
    /// Principal role decoded from the claims.
    pub role: Role,
    /// Display identity, when the credential carries one.
    pub email: Option<String>,
    /// Expiry instant decoded from the claims.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Decode a credential into a session, rejecting expired ones.
    ///
    /// Fails with [`AuthError::InvalidCredential`] on any claim-schema
    /// mismatch and [`AuthError::ExpiredCredential`] when `expires_at <= now`.
    pub fn from_credential(credential: &str, now: DateTime<Utc>) -> Result<Self, AuthError> {
        let claims = crate::claims::decode_claims(credential)?;
        let expires_at = claims.expires_at()?;
        if expires_at <= now {
            return Err(AuthError::ExpiredCredential);
        }
        Ok(Self {
            token: credential.to_string(),
            role: claims.user.role,
            email: claims.user.email,
            expires_at,
        })
    }

    /// Whether the session has expired as of `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Owner of the single process-wide session value.
///
/// Holds the in-memory session behind a lock and keeps it in step with the
/// persisted credential file. `login` and the clearing operations hold the
/// write lock across both the file operation and the in-memory swap, so no
/// reader ever observes persistence and memory out of step.
pub struct SessionStore {
    /// Path of the persisted credential file.
    path: PathBuf,
    /// The in-memory session. `None` means logged out.
    state: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Create a store persisting under `data_dir`. No I/O happens until
    /// `restore` or `login`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: storage::credential_file_path(data_dir),
            state: RwLock::new(None),
        }
    }

    /// Restore a previously persisted session at process start.
    ///
    /// A missing credential is "logged out", not an error. A credential that
    /// fails to decode or has expired is erased from persistence and also
    /// resolves to `None`; nothing is surfaced to the user at this stage.
    pub fn restore(&self) -> Option<Session> {
        let credential = storage::load_credential(&self.path)?;
        match Session::from_credential(&credential, Utc::now()) {
            Ok(session) => {
                let mut state = self.state.write();
                *state = Some(session.clone());
                tracing::info!(role = %session.role, "session restored");
                Some(session)
            }
            Err(e) => {
                tracing::warn!("discarding stored credential: {e}");
                self.clear("stored credential discarded");
                None
            }
        }
    }

    /// Log in with a freshly issued credential.
    ///
    /// Decodes first: a malformed or already-expired credential is rejected
    /// without touching persistence or memory. On success the credential is
    /// persisted and the in-memory session swapped under one write lock, so
    /// the transition is atomic from any reader's point of view.
    pub fn login(&self, credential: &str) -> Result<Session, AuthError> {
        let session = Session::from_credential(credential, Utc::now())?;

        let mut state = self.state.write();
        storage::save_credential(&self.path, credential)?;
        *state = Some(session.clone());
        tracing::info!(role = %session.role, "logged in");
        Ok(session)
    }

    /// Log out: erase the persisted credential and clear in-memory state.
    ///
    /// Idempotent: logging out while already logged out is a no-op.
    pub fn logout(&self) {
        self.clear("logged out");
    }

    /// Destroy the session after the server declined the credential or
    /// expiry was detected. Identical in effect to [`SessionStore::logout`];
    /// kept separate so the log line names the cause.
    pub fn invalidate(&self) {
        self.clear("session invalidated");
    }

    /// A consistent snapshot of the current session.
    ///
    /// Re-checks expiry: a session whose expiry has passed since login is
    /// destroyed here and reported as absent, so guard decisions made from
    /// snapshots are never based on a stale credential.
    pub fn snapshot(&self) -> Option<Session> {
        self.snapshot_at(Utc::now())
    }

    /// Whether an unexpired session currently exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_some()
    }

    fn snapshot_at(&self, now: DateTime<Utc>) -> Option<Session> {
        let current = self.state.read().clone();
        match current {
            Some(session) if session.is_expired_at(now) => {
                tracing::info!("session expired");
                self.clear("expired session cleared");
                None
            }
            other => other,
        }
    }

    fn clear(&self, cause: &str) {
        let mut state = self.state.write();
        if let Err(e) = storage::clear_credential(&self.path) {
            tracing::warn!("failed to erase credential: {e}");
        }
        if state.take().is_some() {
            tracing::info!("{cause}");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
