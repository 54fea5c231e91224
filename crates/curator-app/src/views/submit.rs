//! The contributor's submission form.

use curator_auth::Session;
use curator_client::{ApiError, ContentClient};

/// Inline notice shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The record was accepted.
    Success(String),
    /// Validation or request failure; the form keeps its contents.
    Error(String),
}

/// The submission form: two required fields and an inline notice.
#[derive(Debug, Default)]
pub struct SubmitView {
    /// Record title, bound to the form field.
    pub title: String,
    /// Record description, bound to the form field.
    pub description: String,
    notice: Option<Notice>,
}

impl SubmitView {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form.
    ///
    /// Empty fields fail validation before any network call and leave the
    /// form contents in place. On acceptance the fields clear and a success
    /// notice is shown.
    pub async fn submit(
        &mut self,
        client: &ContentClient,
        session: &Session,
    ) -> Result<(), ApiError> {
        self.notice = None;
        match client
            .submit(&session.token, &self.title, &self.description)
            .await
        {
            Ok(record) => {
                tracing::debug!(id = %record.id, "submission accepted");
                self.title.clear();
                self.description.clear();
                self.notice = Some(Notice::Success(
                    "Content submitted successfully!".to_string(),
                ));
                Ok(())
            }
            Err(ApiError::SessionInvalid) => Err(ApiError::SessionInvalid),
            Err(err @ ApiError::Validation { .. }) => {
                self.notice = Some(Notice::Error(err.to_string()));
                Ok(())
            }
            Err(_) => {
                self.notice = Some(Notice::Error(
                    "Failed to submit content. Please try again.".to_string(),
                ));
                Ok(())
            }
        }
    }

    /// The inline notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
