//! Domain layer containing the sign-in entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Form, credentials and session data structures
//! - [`gateways`] - Traits for the authentication backend, router and toasts
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - The submission workflow lives in [`crate::application::services`]

pub mod entities;
pub mod gateways;
