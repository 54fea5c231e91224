//! Per-view fetch state.
//!
//! Each view owns one [`Fetch`] slot per data section. A slot carries the
//! section's [`ViewState`] plus a monotonically increasing fetch epoch: a
//! resolving request applies its result only if its [`FetchTicket`] still
//! matches the current epoch, so a response that lands after the view was
//! reset (navigation away, a newer fetch) is dropped instead of overwriting
//! newer state.
//!
//! A failed refresh keeps the last-known-good contents; views show the
//! stale data alongside an inline retryable message rather than clearing.

use curator_client::ApiError;

/// Render state of one view data section.
#[derive(Clone, Debug)]
pub enum ViewState<T> {
    /// Nothing fetched yet.
    Idle,
    /// A request is in flight. The previous contents, if any, stay visible.
    Loading {
        /// Contents from before the fetch began.
        last_good: Option<T>,
    },
    /// Data fetched and current.
    Ready(T),
    /// The last request failed; the view keeps its prior contents.
    Failed {
        /// Inline message for the user.
        message: String,
        /// Whether retrying the same fetch can succeed.
        retryable: bool,
        /// Contents from before the failed fetch.
        last_good: Option<T>,
    },
}

impl<T> ViewState<T> {
    /// The contents a view should render, current or last-known-good.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Ready(data) => Some(data),
            Self::Loading { last_good } | Self::Failed { last_good, .. } => last_good.as_ref(),
        }
    }

    /// Whether a request is in flight for this section.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The inline error message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    fn into_data(self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Ready(data) => Some(data),
            Self::Loading { last_good } | Self::Failed { last_good, .. } => last_good,
        }
    }
}

/// Proof of which fetch a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// One view data section: state plus the stale-response guard.
#[derive(Debug)]
pub struct Fetch<T> {
    state: ViewState<T>,
    epoch: u64,
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            epoch: 0,
        }
    }
}

impl<T> Fetch<T> {
    /// Begin a fetch: bump the epoch, move to `Loading`, keep prior data.
    pub fn begin(&mut self) -> FetchTicket {
        self.epoch += 1;
        let last_good = std::mem::replace(&mut self.state, ViewState::Idle).into_data();
        self.state = ViewState::Loading { last_good };
        FetchTicket(self.epoch)
    }

    /// Apply a fetch result, unless it is stale.
    ///
    /// Returns `false` (leaving state untouched) when the ticket no longer
    /// matches the current epoch: the view was reset or a newer fetch
    /// superseded this one while the request was in flight.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.epoch {
            tracing::debug!("dropping stale fetch result");
            return false;
        }
        let last_good = std::mem::replace(&mut self.state, ViewState::Idle).into_data();
        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Failed {
                message: e.to_string(),
                retryable: e.is_retryable(),
                last_good,
            },
        };
        true
    }

    /// Resolve and escalate session invalidation to the caller.
    ///
    /// The view-operation convention: retryable failures land in this
    /// section's state and the operation reports `Ok(())`;
    /// [`ApiError::SessionInvalid`] is also recorded but returned as `Err`
    /// so the shell can destroy the session.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<T, ApiError>,
    ) -> Result<(), ApiError> {
        let invalid = matches!(result, Err(ApiError::SessionInvalid));
        let _ = self.resolve(ticket, result);
        if invalid {
            return Err(ApiError::SessionInvalid);
        }
        Ok(())
    }

    /// Reset on unmount: bump the epoch so in-flight results are dropped.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = ViewState::Idle;
    }

    /// Current render state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Shorthand for [`ViewState::data`].
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
