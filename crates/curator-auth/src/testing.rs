//! Test-only helpers for fabricating credentials.

use jsonwebtoken::{EncodingKey, Header, encode};

use curator_core::Role;

/// Signing secret for fabricated test tokens. The decoder never verifies
/// signatures, so the value is arbitrary.
const TEST_SECRET: &[u8] = b"curator-test-secret";

/// Encode arbitrary claims JSON into a signed test token.
pub(crate) fn encode_claims(claims: &serde_json::Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

/// Encode a well-formed credential for the given principal.
pub(crate) fn encode_token(role: Role, email: Option<&str>, exp: i64) -> String {
    let mut user = serde_json::json!({ "role": role.as_str() });
    if let Some(email) = email {
        user["email"] = serde_json::Value::String(email.to_string());
    }
    encode_claims(&serde_json::json!({ "user": user, "exp": exp }))
}

/// An expiry comfortably in the future.
pub(crate) fn future_exp() -> i64 {
    chrono::Utc::now().timestamp() + 3_600
}

/// An expiry already in the past.
pub(crate) fn past_exp() -> i64 {
    chrono::Utc::now().timestamp() - 3_600
}
