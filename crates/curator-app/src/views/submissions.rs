//! The contributor's own-submissions view.

use curator_auth::Session;
use curator_client::{ApiError, ContentClient};
use curator_core::ContentRecord;

use crate::view::{Fetch, ViewState};

/// Lists the records the contributor submitted, in server-provided order.
#[derive(Debug, Default)]
pub struct SubmissionsView {
    records: Fetch<Vec<ContentRecord>>,
}

impl SubmissionsView {
    /// Empty view; nothing is fetched until [`SubmissionsView::refresh`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the contributor's records.
    pub async fn refresh(
        &mut self,
        client: &ContentClient,
        session: &Session,
    ) -> Result<(), ApiError> {
        let ticket = self.records.begin();
        let result = client.list_own(&session.token).await;
        self.records.finish(ticket, result)
    }

    /// Render state of the submissions table.
    #[must_use]
    pub const fn records(&self) -> &ViewState<Vec<ContentRecord>> {
        self.records.state()
    }

    /// Drop in-flight results on navigation away.
    pub fn unmount(&mut self) {
        self.records.reset();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
