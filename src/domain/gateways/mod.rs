//! Collaborator trait definitions for the domain layer.
//!
//! The sign-in flow talks to three collaborators it does not own. Each is
//! described here by its contract only; concrete implementations live in
//! `crate::infrastructure`.
//!
//! # Available Gateways
//!
//! - [`AuthGateway`] - Credential exchange and local session checks
//! - [`Navigator`] - Redirects after sign-in
//! - [`NotificationSink`] - Success/error toasts
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod auth_gateway;
pub mod navigator;
pub mod notification_sink;

pub use auth_gateway::{AuthError, AuthGateway};
pub use navigator::Navigator;
pub use notification_sink::NotificationSink;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use notification_sink::MockNotificationSink;
