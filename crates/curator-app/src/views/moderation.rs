//! The moderator dashboard.
//!
//! Three server-derived sections (aggregate counts, the filterable full
//! listing, and the recency feed) plus approve/reject on pending rows.
//! After any transition the whole dashboard re-fetches: the counts and the
//! feed are projections the client cannot recompute correctly itself.

use curator_auth::Session;
use curator_client::{ApiError, ContentClient};
use curator_core::{AggregateStats, ContentRecord, ContentStatus, SearchFilter, TransitionAction};

use crate::view::{Fetch, ViewState};

/// Moderator dashboard state.
#[derive(Debug, Default)]
pub struct ModerationView {
    stats: Fetch<AggregateStats>,
    records: Fetch<Vec<ContentRecord>>,
    recent: Fetch<Vec<ContentRecord>>,
    /// Keyword filter, bound to the search field.
    pub keyword: String,
    /// Status filter. `None` shows all statuses.
    pub status_filter: Option<ContentStatus>,
    action_error: Option<String>,
}

impl ModerationView {
    /// Empty dashboard; nothing is fetched until [`ModerationView::refresh`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter the listing currently applies.
    #[must_use]
    pub fn filter(&self) -> SearchFilter {
        let keyword = self.keyword.trim();
        SearchFilter {
            status: self.status_filter,
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
        }
    }

    /// Fetch all three sections.
    ///
    /// Sections load independently: an early failure is recorded in that
    /// section's state and the remaining fetches still run.
    pub async fn refresh(
        &mut self,
        client: &ContentClient,
        session: &Session,
    ) -> Result<(), ApiError> {
        self.action_error = None;

        let stats_ticket = self.stats.begin();
        let records_ticket = self.records.begin();
        let recent_ticket = self.recent.begin();

        let result = client.stats(&session.token).await;
        self.stats.finish(stats_ticket, result)?;

        let result = client.list_all(&session.token, &self.filter()).await;
        self.records.finish(records_ticket, result)?;

        let result = client.list_recent(&session.token).await;
        self.recent.finish(recent_ticket, result)
    }

    /// Re-fetch only the listing with the current filter.
    pub async fn search(
        &mut self,
        client: &ContentClient,
        session: &Session,
    ) -> Result<(), ApiError> {
        let ticket = self.records.begin();
        let result = client.list_all(&session.token, &self.filter()).await;
        self.records.finish(ticket, result)
    }

    /// Approve or reject one pending record, then re-fetch the dashboard.
    ///
    /// The refresh is issued only after the transition resolves
    /// (read-after-write for this session). A failed transition leaves all
    /// sections untouched and sets an inline message.
    pub async fn act(
        &mut self,
        client: &ContentClient,
        session: &Session,
        id: &str,
        action: TransitionAction,
    ) -> Result<(), ApiError> {
        self.action_error = None;
        match client.transition(&session.token, id, action).await {
            Ok(()) => self.refresh(client, session).await,
            Err(ApiError::SessionInvalid) => Err(ApiError::SessionInvalid),
            Err(e) => {
                tracing::warn!(id, %action, "transition failed: {e}");
                self.action_error = Some(e.to_string());
                Ok(())
            }
        }
    }

    /// Render state of the aggregate counts.
    #[must_use]
    pub const fn stats(&self) -> &ViewState<AggregateStats> {
        self.stats.state()
    }

    /// Render state of the full listing.
    #[must_use]
    pub const fn records(&self) -> &ViewState<Vec<ContentRecord>> {
        self.records.state()
    }

    /// Render state of the recency feed.
    #[must_use]
    pub const fn recent(&self) -> &ViewState<Vec<ContentRecord>> {
        self.recent.state()
    }

    /// Inline message from a failed transition, if any.
    #[must_use]
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Drop in-flight results on navigation away.
    pub fn unmount(&mut self) {
        self.stats.reset();
        self.records.reset();
        self.recent.reset();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
