//! Content records and the approval lifecycle.
//!
//! A record is created `pending` and may transition exactly once, to
//! `approved` or `rejected`. Both outcomes are terminal: the client never
//! offers a transition action once a record has left `pending` (the server
//! is the authority that enforces this).
//!
//! The serde derives mirror the content service's JSON: records arrive with
//! `_id`, an optional `createdBy` object, and a `createdAt` instant.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Status and transitions
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle status of a content record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    /// Awaiting moderation. The only state transitions are offered from.
    Pending,
    /// Accepted by a moderator. Terminal.
    Approved,
    /// Declined by a moderator. Terminal.
    Rejected,
}

impl ContentStatus {
    /// Whether no further transition is permitted from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A moderation decision on a pending record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionAction {
    /// `pending → approved`.
    Approve,
    /// `pending → rejected`.
    Reject,
}

impl TransitionAction {
    /// Path segment for the transition endpoint (`PUT /content/{id}/{action}`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// The status a record holds after this action succeeds.
    #[must_use]
    pub const fn resulting_status(self) -> ContentStatus {
        match self {
            Self::Approve => ContentStatus::Approved,
            Self::Reject => ContentStatus::Rejected,
        }
    }
}

impl fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Submitter reference as embedded in a record (`createdBy`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submitter {
    /// Display identity of the submitting principal.
    pub email: String,
}

/// A content record as returned by the content service.
///
/// The client holds transient, possibly-stale copies fetched per view; the
/// remote store owns the records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Opaque stable identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Free text, non-empty at submission time.
    pub title: String,
    /// Free text, non-empty at submission time.
    pub description: String,
    /// Lifecycle status.
    pub status: ContentStatus,
    /// Submitting principal. Optional on the wire.
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Submitter>,
    /// Creation instant, used only for display ordering.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContentRecord {
    /// Whether approve/reject actions may be offered for this record.
    #[must_use]
    pub const fn actionable(&self) -> bool {
        matches!(self.status, ContentStatus::Pending)
    }

    /// Display label for the submitter, if the wire carried one.
    #[must_use]
    pub fn submitter_email(&self) -> Option<&str> {
        self.created_by.as_ref().map(|s| s.email.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregates
// ─────────────────────────────────────────────────────────────────────────────

/// Counts of records by status plus total.
///
/// A server-computed projection over the current record population. The
/// client only displays these values; after a transition it re-fetches
/// rather than adjusting them locally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Records in `approved`.
    pub approved: u64,
    /// Records in `pending`.
    pub pending: u64,
    /// Records in `rejected`.
    pub rejected: u64,
    /// All records.
    pub total: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
