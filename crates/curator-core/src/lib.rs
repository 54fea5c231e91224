//! # curator-core
//!
//! Shared vocabulary for the Curator client core.
//!
//! This crate provides the types every other Curator crate depends on:
//!
//! - **Roles**: the closed [`Role`] variant (`Contributor` / `Moderator`)
//! - **Content**: [`ContentRecord`], [`ContentStatus`], [`TransitionAction`],
//!   and the server-computed [`AggregateStats`] projection
//! - **Filters**: [`SearchFilter`] for the moderator listing
//!
//! Serde derives on the content types mirror the content service's JSON wire
//! format exactly (`_id`, `createdBy`, `createdAt`).

#![deny(unsafe_code)]

pub mod content;
pub mod filter;
pub mod roles;

pub use content::{AggregateStats, ContentRecord, ContentStatus, Submitter, TransitionAction};
pub use filter::SearchFilter;
pub use roles::Role;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
