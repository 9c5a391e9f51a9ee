//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the authentication backend, session storage
//! and the terminal front end.
//!
//! # Modules
//!
//! - [`http`] - MindFit REST API client
//! - [`session`] - Session storage (in-memory and file-backed)
//! - [`terminal`] - Terminal navigator and notifier

pub mod http;
pub mod session;
pub mod terminal;
