#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use mindfit_admin_login::domain::gateways::{Navigator, NotificationSink};
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const VALID_EMAIL: &str = "admin@mindfit.com";
pub const VALID_PASSWORD: &str = "secret1";
pub const TOKEN: &str = "fake-session-token";

/// How the fake backend answers a bad password.
#[derive(Clone, Copy)]
pub enum Rejection {
    /// `401 {"message": "..."}`
    WithMessage(&'static str),
    /// `401` with an empty body
    Bare,
    /// `500` with a plain-text body
    ServerError,
}

/// In-process stand-in for the MindFit `POST /api/auth/login` endpoint.
///
/// Besides `/api/auth/login` it serves two misbehaving variants:
/// `/broken/auth/login` answers 200 with a non-JSON body and
/// `/slow/auth/login` answers only after two seconds.
#[derive(Clone)]
pub struct FakeBackend {
    calls: Arc<AtomicUsize>,
    token: String,
    rejection: Rejection,
}

impl FakeBackend {
    pub fn new(rejection: Rejection) -> Self {
        Self::with_token(TOKEN, rejection)
    }

    pub fn with_token(token: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            token: token.into(),
            rejection,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Serves the fake on an ephemeral port and returns the `/api` base URL.
    pub async fn spawn(&self) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/broken/auth/login", post(broken_login))
            .route("/slow/auth/login", post(slow_login))
            .with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Url::parse(&format!("http://{addr}/api")).unwrap()
    }
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(State(backend): State<FakeBackend>, Json(body): Json<LoginBody>) -> Response {
    backend.calls.fetch_add(1, Ordering::SeqCst);

    if body.email == VALID_EMAIL && body.password == VALID_PASSWORD {
        return Json(json!({ "token": backend.token, "type": "Bearer" })).into_response();
    }

    match backend.rejection {
        Rejection::WithMessage(message) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": 401, "message": message })),
        )
            .into_response(),
        Rejection::Bare => StatusCode::UNAUTHORIZED.into_response(),
        Rejection::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
        }
    }
}

async fn broken_login(State(backend): State<FakeBackend>) -> Response {
    backend.calls.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, "<html>maintenance</html>").into_response()
}

async fn slow_login(State(backend): State<FakeBackend>) -> Response {
    backend.calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({ "token": backend.token })).into_response()
}

/// Replaces the last path segment of `base` (`/api`) with `segment`.
pub fn sibling(base: &Url, segment: &str) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("/{segment}"));
    url
}

/// Something the workflow asked the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Success(String),
    Error(String),
    Navigate(String),
}

/// Navigator and notification sink that records calls in order.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<UiEvent>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Navigator for Recorder {
    fn navigate_to(&self, route: &str) {
        self.push(UiEvent::Navigate(route.to_string()));
    }
}

impl NotificationSink for Recorder {
    fn success(&self, text: &str) {
        self.push(UiEvent::Success(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.push(UiEvent::Error(text.to_string()));
    }
}

pub fn jwt_expiring_at(exp: i64) -> String {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"admin","exp":{exp}}}"#))
    )
}
