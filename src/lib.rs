//! # MindFit Admin Login
//!
//! The sign-in step of the MindFit admin dashboard: a validated email/password
//! form, a single-flight call to the MindFit authentication API, and exactly
//! one visible outcome per attempt (success toast plus redirect, or an inline
//! error mirrored to an error toast).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form, credentials, session and collaborator traits
//! - **Application Layer** ([`application`]) - The login submission workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP gateway, session storage,
//!   terminal navigator and notifier
//!
//! ## Quick Start
//!
//! ```bash
//! export AUTH_API_URL="http://localhost:8080/api"
//! cargo run -- login --email admin@mindfit.com
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginWorkflow, SubmissionState, SubmitOutcome};
    pub use crate::domain::entities::{Credentials, LoginForm, Session};
    pub use crate::domain::gateways::{AuthError, AuthGateway, Navigator, NotificationSink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpAuthGateway;
    pub use crate::infrastructure::session::{
        FileSessionStore, MemorySessionStore, SessionStore,
    };
}
