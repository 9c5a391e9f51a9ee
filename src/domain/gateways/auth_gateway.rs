//! Boundary to the authentication backend.

use crate::domain::entities::{Credentials, Session};
use async_trait::async_trait;
use thiserror::Error;

/// Why a login attempt failed.
///
/// Only [`AuthError::Rejected`] can carry a backend-provided message; its
/// absence is a normal case that callers must handle with their own default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend answered with a non-success status.
    #[error("authentication rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The backend could not be reached or did not answer in time.
    #[error("authentication service unreachable: {0}")]
    Transport(String),

    /// The backend answered with success but the body was unusable.
    #[error("unexpected authentication response: {0}")]
    Protocol(String),
}

impl AuthError {
    /// Creates a rejection, dropping empty messages.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected {
            status,
            message: message.filter(|m| !m.is_empty()),
        }
    }

    /// Human-readable message supplied by the backend, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Protocol(_) => None,
        }
    }
}

/// Authentication backend as seen by the sign-in flow.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpAuthGateway`] - MindFit REST API client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the backend refuses the credentials,
    /// [`AuthError::Transport`] when it cannot be reached, and
    /// [`AuthError::Protocol`] when its success response cannot be understood.
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Reports whether a still-valid session is held locally.
    ///
    /// Must not perform network I/O.
    fn is_authenticated(&self) -> bool;
}
