//! The moderator's approvals queue.

use curator_auth::Session;
use curator_client::{ApiError, ContentClient};
use curator_core::{ContentRecord, ContentStatus, SearchFilter, TransitionAction};

use crate::view::{Fetch, ViewState};

/// Pending submissions awaiting a moderation decision.
#[derive(Debug, Default)]
pub struct ApprovalsView {
    pending: Fetch<Vec<ContentRecord>>,
    action_error: Option<String>,
}

impl ApprovalsView {
    /// Empty queue; nothing is fetched until [`ApprovalsView::refresh`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the pending queue.
    pub async fn refresh(
        &mut self,
        client: &ContentClient,
        session: &Session,
    ) -> Result<(), ApiError> {
        self.action_error = None;
        let ticket = self.pending.begin();
        let result = client
            .list_all(
                &session.token,
                &SearchFilter::by_status(ContentStatus::Pending),
            )
            .await;
        self.pending.finish(ticket, result)
    }

    /// Approve or reject one pending record.
    ///
    /// The queue refresh is issued only after the transition resolves
    /// (read-after-write); on transition failure the queue keeps its
    /// current contents and an inline message is set instead.
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

    /// Render state of the queue.
    #[must_use]
    pub const fn pending(&self) -> &ViewState<Vec<ContentRecord>> {
        self.pending.state()
    }

    /// Inline message from a failed transition, if any.
    #[must_use]
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Drop in-flight results on navigation away.
    pub fn unmount(&mut self) {
        self.pending.reset();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
