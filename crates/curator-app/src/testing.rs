//! Test-only helpers for fabricating sessions and records.

use jsonwebtoken::{EncodingKey, Header, encode};

use curator_auth::Session;
use curator_core::Role;

/// Encode a well-formed credential for the given role.
pub(crate) fn token(role: Role) -> String {
    let exp = chrono::Utc::now().timestamp() + 3_600;
    let claims = serde_json::json!({
        "user": { "role": role.as_str(), "email": "principal@example.com" },
        "exp": exp,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"curator-test-secret"),
    )
    .unwrap()
}

/// A live session for the given role.
pub(crate) fn session(role: Role) -> Session {
    Session::from_credential(&token(role), chrono::Utc::now()).unwrap()
}

/// Wire JSON for one content record.
pub(crate) fn record_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": format!("title-{id}"),
        "description": format!("description-{id}"),
        "status": status,
        "createdBy": { "email": "sam@example.com" },
        "createdAt": "2024-03-01T12:00:00Z"
    })
}
