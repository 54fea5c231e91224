//! Login and signup.

use curator_client::ApiError;

use crate::app::App;
use crate::routes::Route;

/// The login/signup form.
///
/// A declined login surfaces inline and leaves session state untouched; a
/// successful one stores the issued credential through the session store
/// and lands on the dashboard.
#[derive(Debug, Default)]
pub struct AuthView {
    /// Account email, bound to the form field.
    pub email: String,
    /// Account password, bound to the form field.
    pub password: String,
    error: Option<String>,
}

impl AuthView {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt login. Returns the route landed on when the attempt
    /// succeeds, `None` when the inline error was set instead.
    pub async fn login(&mut self, app: &mut App) -> Option<Route> {
        self.error = None;
        let token = match app.client().login(&self.email, &self.password).await {
            Ok(token) => token,
            Err(ApiError::CredentialsRejected) => {
                self.error = Some("Invalid credentials. Please try again.".to_string());
                return None;
            }
            Err(e) => {
                tracing::warn!("login request failed: {e}");
                self.error = Some("Login failed. Please try again.".to_string());
                return None;
            }
        };

        // The server issued a credential the client cannot decode: fail
        // closed rather than guessing a role.
        match app.sessions().login(&token) {
            Ok(_) => Some(app.navigate(Route::Dashboard)),
            Err(e) => {
                tracing::warn!("issued credential rejected: {e}");
                self.error = Some("Login failed. Please try again.".to_string());
                None
            }
        }
    }

    /// Attempt signup. On success the flow returns to the login view with
    /// the form fields kept for convenience.
    pub async fn signup(&mut self, app: &mut App) -> Option<Route> {
        self.error = None;
        match app.client().signup(&self.email, &self.password).await {
            Ok(()) => Some(Route::Login),
            Err(e) => {
                tracing::warn!("signup request failed: {e}");
                self.error = Some("Signup failed. Please try again.".to_string());
                None
            }
        }
    }

    /// The inline error, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::token;
    use curator_core::Role;
    use curator_settings::{ApiSettings, Settings, StorageSettings};
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(server: &MockServer, dir: &TempDir) -> App {
        let settings = Settings {
            api: ApiSettings {
                base_url: server.uri(),
            },
            storage: StorageSettings {
                data_dir: Some(dir.path().to_string_lossy().into_owned()),
            },
        };
        App::new(&settings)
    }

    #[tokio::test]
    async fn successful_login_lands_on_dashboard() {
        let server = MockServer::start().await;
        let issued = token(Role::Contributor);
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": issued })),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server, &dir);
        let mut view = AuthView::new();
        view.email = "sam@example.com".to_string();
        view.password = "hunter2".to_string();

        assert_eq!(view.login(&mut app).await, Some(Route::Dashboard));
        assert_eq!(app.session().unwrap().role, Role::Contributor);
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn declined_login_sets_inline_error_and_keeps_session_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server, &dir);
        let mut view = AuthView::new();

        assert!(view.login(&mut app).await.is_none());
        assert_eq!(view.error(), Some("Invalid credentials. Please try again."));
        assert!(app.session().is_none());
    }

    #[tokio::test]
    async fn undecodable_issued_credential_fails_closed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "token": "garbage" })),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server, &dir);
        let mut view = AuthView::new();

        assert!(view.login(&mut app).await.is_none());
        assert!(app.session().is_none(), "no default role is ever granted");
    }

    #[tokio::test]
    async fn signup_flows_back_to_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server, &dir);
        let mut view = AuthView::new();
        view.email = "new@example.com".to_string();
        view.password = "pw".to_string();

        assert_eq!(view.signup(&mut app).await, Some(Route::Login));
    }

    #[tokio::test]
    async fn failed_signup_sets_inline_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .respond_with(ResponseTemplate::new(409).set_body_string("exists"))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server, &dir);
        let mut view = AuthView::new();

        assert!(view.signup(&mut app).await.is_none());
        assert!(view.error().is_some());
    }
}
