//! The content service client.

use reqwest::StatusCode;

use curator_core::{AggregateStats, ContentRecord, SearchFilter, TransitionAction};

use crate::errors::ApiError;
use crate::types::{LoginRequest, LoginResponse, SubmitRequest};

/// Client for the Curator content service.
///
/// One instance per process, sharing a single [`reqwest::Client`].
/// Authorized operations take the bearer token per call rather than holding
/// a copy; the session store remains the only owner of credential state.
pub struct ContentClient {
    /// Service base URL, without trailing slash (e.g. `http://host/api`).
    base_url: String,
    /// Shared HTTP client.
    http: reqwest::Client,
}

impl ContentClient {
    /// Create a client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a shared HTTP client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            let _ = base_url.pop();
        }
        Self { base_url, http }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ── Auth ─────────────────────────────────────────────────────────

    /// Exchange credentials for a bearer token (`POST /auth/login`).
    ///
    /// A 4xx decline is [`ApiError::CredentialsRejected`]; the caller shows
    /// an inline message and leaves session state untouched.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), "login declined");
            return Err(ApiError::CredentialsRejected);
        }
        if !status.is_success() {
            return Err(status_error(resp).await);
        }

        let data: LoginResponse = resp.json().await?;
        Ok(data.token)
    }

    /// Create an account (`POST /auth/signup`). Success is any 2xx; the
    /// caller flows back to login.
    #[tracing::instrument(skip_all)]
    pub async fn signup(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http
            .post(self.endpoint("/auth/signup"))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }

    // ── Listings ─────────────────────────────────────────────────────

    /// The caller's own records, in server-provided order (`GET /content`).
    #[tracing::instrument(skip_all)]
    pub async fn list_own(&self, token: &str) -> Result<Vec<ContentRecord>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint("/content"))
            .bearer_auth(token)
            .send()
            .await?;
        let records: Vec<ContentRecord> = check(resp).await?.json().await?;
        tracing::debug!(count = records.len(), "fetched own records");
        Ok(records)
    }

    /// All records, optionally filtered (`GET /content/search`).
    ///
    /// An empty filter returns the unfiltered full set. Filtering happens
    /// server-side; the result is never re-filtered or re-sorted locally.
    #[tracing::instrument(skip_all)]
    pub async fn list_all(
        &self,
        token: &str,
        filter: &SearchFilter,
    ) -> Result<Vec<ContentRecord>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = filter.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(keyword) = &filter.keyword {
            params.push(("keyword", keyword.clone()));
        }

        let mut req = self.http.get(self.endpoint("/content/search"));
        if !params.is_empty() {
            req = req.query(&params);
        }
        let resp = req.bearer_auth(token).send().await?;
        let records: Vec<ContentRecord> = check(resp).await?.json().await?;
        tracing::debug!(count = records.len(), "fetched filtered records");
        Ok(records)
    }

    /// Bounded server-ordered recency feed (`GET /content/recent`).
    #[tracing::instrument(skip_all)]
    pub async fn list_recent(&self, token: &str) -> Result<Vec<ContentRecord>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint("/content/recent"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Current counts by status (`GET /content/stats`).
    #[tracing::instrument(skip_all)]
    pub async fn stats(&self, token: &str) -> Result<AggregateStats, ApiError> {
        let resp = self
            .http
            .get(self.endpoint("/content/stats"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Submit a new record (`POST /content`).
    ///
    /// Both fields must be non-empty after trimming; the check runs before
    /// any network call. The created record comes back `pending`.
    #[tracing::instrument(skip_all)]
    pub async fn submit(
        &self,
        token: &str,
        title: &str,
        description: &str,
    ) -> Result<ContentRecord, ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::Validation { field: "title" });
        }
        if description.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "description",
            });
        }

        let body = SubmitRequest {
            title: title.to_string(),
            description: description.to_string(),
        };
        let resp = self
            .http
            .post(self.endpoint("/content"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        let record: ContentRecord = check(resp).await?.json().await?;
        tracing::debug!(id = %record.id, "record submitted");
        Ok(record)
    }

    /// Transition a pending record (`PUT /content/{id}/approve|reject`).
    ///
    /// Only meaningful while the target is `pending`. On success the caller
    /// must treat its view data as stale and re-fetch; stats and the
    /// recency feed are server-derived projections the client cannot
    /// recompute itself.
    #[tracing::instrument(skip_all, fields(id = %id, action = %action))]
    pub async fn transition(
        &self,
        token: &str,
        id: &str,
        action: TransitionAction,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.endpoint(&format!("/content/{id}/{}", action.as_str())))
            .bearer_auth(token)
            .send()
            .await?;
        let _ = check(resp).await?;
        tracing::debug!(id, "record transitioned");
        Ok(())
    }
}

/// Map a response's status to the error taxonomy, passing 2xx through.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::warn!(status = status.as_u16(), "credential no longer accepted");
        return Err(ApiError::SessionInvalid);
    }
    Err(status_error(resp).await)
}

/// Build a [`ApiError::Status`] from a non-2xx response.
async fn status_error(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = resp.text().await.unwrap_or_default();
    ApiError::Status { status, message }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::ContentStatus;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "title": "Report Q1",
            "description": "quarterly numbers",
            "status": status,
            "createdBy": { "email": "sam@example.com" },
            "createdAt": "2024-03-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "sam@example.com",
                "password": "hunter2"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "tok-1" })),
            )
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let token = client.login("sam@example.com", "hunter2").await.unwrap();
        assert_eq!(token, "tok-1");
    }

    #[tokio::test]
    async fn login_decline_is_credentials_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let err = client.login("sam@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, ApiError::CredentialsRejected));
    }

    #[tokio::test]
    async fn login_server_error_is_retryable_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let err = client.login("sam@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn signup_succeeds_on_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        assert!(client.signup("new@example.com", "pw").await.is_ok());
    }

    #[tokio::test]
    async fn list_own_sends_bearer_and_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                record_json("b", "pending"),
                record_json("a", "approved"),
            ])))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let records = client.list_own("tok-1").await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"], "server order must be preserved");
    }

    #[tokio::test]
    async fn list_all_combines_filter_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/search"))
            .and(query_param("status", "pending"))
            .and(query_param("keyword", "report"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([record_json("a", "pending")])),
            )
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let filter = SearchFilter {
            status: Some(ContentStatus::Pending),
            keyword: Some("report".to_string()),
        };
        let records = client.list_all("tok-1", &filter).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn list_all_empty_filter_sends_no_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let records = client
            .list_all("tok-1", &SearchFilter::default())
            .await
            .unwrap();
        assert!(records.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.query().is_none());
    }

    #[tokio::test]
    async fn stats_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "approved": 3, "pending": 2, "rejected": 1, "total": 6
            })))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let stats = client.stats("tok-1").await.unwrap();
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.total, 6);
    }

    #[tokio::test]
    async fn submit_validates_before_any_network_call() {
        // No mocks mounted: a network attempt would surface as Status(404),
        // not Validation.
        let server = MockServer::start().await;
        let client = ContentClient::new(server.uri());

        let err = client.submit("tok-1", "", "body").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "title" }));

        let err = client.submit("tok-1", "title", "   ").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation {
                field: "description"
            }
        ));

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_returns_pending_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .and(header("authorization", "Bearer tok-1"))
            .and(body_json(serde_json::json!({
                "title": "Report Q1",
                "description": "quarterly numbers"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(record_json("new-1", "pending")),
            )
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let record = client
            .submit("tok-1", "Report Q1", "quarterly numbers")
            .await
            .unwrap();
        assert_eq!(record.id, "new-1");
        assert_eq!(record.status, ContentStatus::Pending);
    }

    #[tokio::test]
    async fn transition_hits_action_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/content/abc123/approve"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        client
            .transition("tok-1", "abc123", TransitionAction::Approve)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_maps_to_session_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/content/abc123/reject"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        assert!(matches!(
            client.list_own("stale").await.unwrap_err(),
            ApiError::SessionInvalid
        ));
        assert!(matches!(
            client
                .transition("stale", "abc123", TransitionAction::Reject)
                .await
                .unwrap_err(),
            ApiError::SessionInvalid
        ));
    }

    #[tokio::test]
    async fn server_error_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/recent"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ContentClient::new(server.uri());
        let err = client.list_recent("tok-1").await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ContentClient::new("http://host/api/");
        assert_eq!(client.endpoint("/content"), "http://host/api/content");
    }
}
