//! Infrastructure-level error type.
//!
//! Login failures are not errors at this level: they travel as
//! [`crate::domain::gateways::AuthError`] and end up on screen. [`AppError`]
//! covers the plumbing around them: session storage and HTTP client setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("session storage error: {0}")]
    SessionIo(#[from] std::io::Error),

    #[error("stored session is unreadable: {0}")]
    SessionFormat(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}
