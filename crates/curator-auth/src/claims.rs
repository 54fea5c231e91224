//! Credential claim schema and decoding.
//!
//! The bearer credential is a JWT whose claims carry the principal and an
//! expiry instant. The client decodes claims without verifying the
//! signature (the content service is the verifying authority on every
//! request) but it decodes against an explicit schema and fails closed:
//! any mismatch (missing `exp`, missing or unknown role, malformed token)
//! is [`AuthError::InvalidCredential`], which callers treat as an absent
//! session.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use curator_core::Role;

use crate::errors::AuthError;

/// Principal object embedded in the credential (`user` claim).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrincipalClaims {
    /// Role of the principal. Unknown role strings fail the decode.
    pub role: Role,
    /// Display identity, when the issuer embeds one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Expected claims of a Curator credential.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// The authenticated principal.
    pub user: PrincipalClaims,
    /// Expiry, Unix seconds. The session is valid only while `now` is
    /// strictly before this instant.
    pub exp: i64,
}

impl TokenClaims {
    /// Expiry as an instant.
    ///
    /// An `exp` outside chrono's representable range counts as malformed.
    pub fn expires_at(&self) -> Result<DateTime<Utc>, AuthError> {
        DateTime::from_timestamp(self.exp, 0).ok_or_else(|| {
            AuthError::InvalidCredential(format!("exp claim out of range: {}", self.exp))
        })
    }
}

/// Decode a credential's claims against the expected schema.
///
/// Signature and expiry are NOT checked here: expiry handling differs by
/// call site (restore silently discards, login rejects), so callers compare
/// [`TokenClaims::expires_at`] against their own `now`.
pub fn decode_claims(credential: &str) -> Result<TokenClaims, AuthError> {
    // Signature validation off; the algorithm argument is inert but required.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenClaims>(credential, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;
    Ok(data.claims)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{encode_claims, encode_token, future_exp};

    #[test]
    fn decodes_well_formed_credential() {
        let token = encode_token(Role::Moderator, Some("mod@example.com"), future_exp());
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user.role, Role::Moderator);
        assert_eq!(claims.user.email.as_deref(), Some("mod@example.com"));
        assert!(claims.expires_at().unwrap() > Utc::now());
    }

    #[test]
    fn email_is_optional() {
        let token = encode_token(Role::Contributor, None, future_exp());
        let claims = decode_claims(&token).unwrap();
        assert!(claims.user.email.is_none());
    }

    #[test]
    fn garbage_fails_closed() {
        assert!(matches!(
            decode_claims("not-a-token"),
            Err(AuthError::InvalidCredential(_))
        ));
        assert!(matches!(
            decode_claims(""),
            Err(AuthError::InvalidCredential(_))
        ));
    }

    #[test]
    fn missing_role_fails_closed() {
        // Claims with a user object but no role field.
        let token = encode_claims(&serde_json::json!({
            "user": { "email": "x@example.com" },
            "exp": future_exp(),
        }));
        assert!(matches!(
            decode_claims(&token),
            Err(AuthError::InvalidCredential(_))
        ));
    }

    #[test]
    fn unknown_role_fails_closed() {
        let token = encode_claims(&serde_json::json!({
            "user": { "role": "superuser" },
            "exp": future_exp(),
        }));
        assert!(matches!(
            decode_claims(&token),
            Err(AuthError::InvalidCredential(_))
        ));
    }

    #[test]
    fn missing_exp_fails_closed() {
        let token = encode_claims(&serde_json::json!({
            "user": { "role": "contributor" },
        }));
        assert!(matches!(
            decode_claims(&token),
            Err(AuthError::InvalidCredential(_))
        ));
    }

    #[test]
    fn expired_credential_still_decodes() {
        // Expiry is the caller's concern, not the decoder's.
        let token = encode_token(Role::Contributor, None, 1_000);
        let claims = decode_claims(&token).unwrap();
        assert!(claims.expires_at().unwrap() < Utc::now());
    }

    #[test]
    fn extra_claims_are_ignored() {
        let token = encode_claims(&serde_json::json!({
            "user": { "role": "moderator", "id": "u1" },
            "exp": future_exp(),
            "iat": 1_700_000_000,
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user.role, Role::Moderator);
    }
}
