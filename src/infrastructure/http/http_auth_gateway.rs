//! MindFit REST API implementation of [`AuthGateway`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{Credentials, Session};
use crate::domain::gateways::{AuthError, AuthGateway};
use crate::error::AppError;
use crate::infrastructure::session::SessionStore;

/// Path of the login endpoint, relative to the API base URL.
pub const LOGIN_PATH: &str = "auth/login";

/// Successful login body.
#[derive(Deserialize)]
struct LoginResponse {
    #[serde(alias = "accessToken")]
    token: String,
}

/// Error body; `message` is what gets shown to the user.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Authenticates against `POST {base}/auth/login` and keeps the resulting
/// session in a [`SessionStore`].
///
/// # Wire Format
///
/// ```text
/// POST /api/auth/login
/// {"email": "admin@mindfit.com", "password": "..."}
///
/// 200 {"token": "<jwt>"}
/// 401 {"message": "Invalid credentials"}
/// ```
pub struct HttpAuthGateway<S: SessionStore> {
    client: reqwest::Client,
    login_url: Url,
    store: Arc<S>,
}

impl<S: SessionStore> HttpAuthGateway<S> {
    /// Creates a gateway for the API rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Endpoint`] if the login URL cannot be derived from
    /// `api_base`, or [`AppError::HttpClient`] if the client cannot be built.
    pub fn new(api_base: &Url, timeout: Duration, store: Arc<S>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mindfit-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            login_url: endpoint(api_base, LOGIN_PATH)?,
            store,
        })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// Returns the locally stored session, expired or not.
    ///
    /// # Errors
    ///
    /// Propagates session storage errors.
    pub fn current_session(&self) -> Result<Option<Session>, AppError> {
        self.store.load()
    }

    /// Forgets the local session.
    ///
    /// # Errors
    ///
    /// Propagates session storage errors.
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.clear()
    }
}

#[async_trait]
impl<S: SessionStore> AuthGateway for HttpAuthGateway<S> {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(self.login_url.clone())
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Login endpoint answered");

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(AuthError::rejected(status.as_u16(), message));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Protocol(e.without_url().to_string()))?;

        if body.token.trim().is_empty() {
            return Err(AuthError::Protocol("empty token".to_string()));
        }

        let session = Session::new(body.token, credentials.email());

        if let Err(e) = self.store.save(&session) {
            warn!(error = %e, "Failed to persist session; it will not survive a restart");
        }

        Ok(session)
    }

    fn is_authenticated(&self) -> bool {
        match self.store.load() {
            Ok(Some(session)) => !session.is_expired(),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session; treating as signed out");
                false
            }
        }
    }
}

/// Joins `path` onto `base` as a child, even when `base` lacks a trailing slash.
///
/// `Url::join` would otherwise replace the last segment (`/api` + `auth/login`
/// gives `/auth/login`).
fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::session::MockSessionStore;
    use chrono::{Duration as ChronoDuration, Utc};

    fn gateway(store: MockSessionStore) -> HttpAuthGateway<MockSessionStore> {
        let base = Url::parse("http://localhost:8080/api").unwrap();
        HttpAuthGateway::new(&base, Duration::from_secs(5), Arc::new(store)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://localhost:8080/api").unwrap();
        assert_eq!(
            endpoint(&base, LOGIN_PATH).unwrap().as_str(),
            "http://localhost:8080/api/auth/login"
        );

        let base = Url::parse("https://admin.mindfit.com/api/").unwrap();
        assert_eq!(
            endpoint(&base, LOGIN_PATH).unwrap().as_str(),
            "https://admin.mindfit.com/api/auth/login"
        );

        let base = Url::parse("http://localhost:8080").unwrap();
        assert_eq!(
            endpoint(&base, LOGIN_PATH).unwrap().as_str(),
            "http://localhost:8080/auth/login"
        );
    }

    #[test]
    fn test_is_authenticated_with_valid_session() {
        let mut store = MockSessionStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Ok(Some(Session::new("t", "admin@mindfit.com"))));

        assert!(gateway(store).is_authenticated());
    }

    #[test]
    fn test_is_authenticated_with_expired_session() {
        let mut store = MockSessionStore::new();
        store.expect_load().returning(|| {
            let mut session = Session::new("t", "admin@mindfit.com");
            session.expires_at = Some(Utc::now() - ChronoDuration::minutes(5));
            Ok(Some(session))
        });

        assert!(!gateway(store).is_authenticated());
    }

    #[test]
    fn test_is_authenticated_without_session() {
        let mut store = MockSessionStore::new();
        store.expect_load().returning(|| Ok(None));

        assert!(!gateway(store).is_authenticated());
    }

    #[test]
    fn test_is_authenticated_on_store_error() {
        let mut store = MockSessionStore::new();
        store.expect_load().returning(|| {
            Err(AppError::SessionIo(std::io::Error::other("disk on fire")))
        });

        assert!(!gateway(store).is_authenticated());
    }

    #[test]
    fn test_logout_clears_store() {
        let mut store = MockSessionStore::new();
        store.expect_clear().times(1).returning(|| Ok(()));

        assert!(gateway(store).logout().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let mut store = MockSessionStore::new();
        store.expect_save().never();

        // Port 9 (discard) on localhost is closed in test environments.
        let base = Url::parse("http://127.0.0.1:9/api").unwrap();
        let gateway =
            HttpAuthGateway::new(&base, Duration::from_secs(2), Arc::new(store)).unwrap();

        let result = gateway
            .login(&Credentials::new("admin@mindfit.com", "secret1"))
            .await;

        assert!(matches!(result, Err(AuthError::Transport(_))));
    }
}
