//! Principal roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an authenticated principal.
///
/// Derived exclusively from the credential's claims, never stored or
/// trusted independently. The wire strings are `"contributor"` and
/// `"moderator"`; anything else fails deserialization, which callers treat
/// as an absent session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Submits content records and sees their own submissions.
    Contributor,
    /// Reviews the moderation queue and transitions records.
    Moderator,
}

impl Role {
    /// Wire string for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contributor => "contributor",
            Self::Moderator => "moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        let json = serde_json::to_string(&Role::Moderator).unwrap();
        assert_eq!(json, "\"moderator\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Moderator);
    }

    #[test]
    fn unknown_role_string_fails() {
        let result = serde_json::from_str::<Role>("\"admin\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_wire_string() {
        assert_eq!(Role::Contributor.to_string(), "contributor");
        assert_eq!(Role::Moderator.as_str(), "moderator");
    }
}
