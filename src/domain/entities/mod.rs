//! Core domain entities of the sign-in flow.
//!
//! Entities are plain data structures. The only logic they carry is local and
//! pure: field validation on [`LoginForm`] and expiry checks on [`Session`].
//!
//! # Entity Types
//!
//! - [`LoginForm`] - Email/password inputs with touched flags and validation
//! - [`Credentials`] - Snapshot of the form submitted to the backend
//! - [`Session`] - Proof of authentication returned by the backend

pub mod credentials;
pub mod login_form;
pub mod session;

pub use credentials::Credentials;
pub use login_form::{
    Field, FieldError, FormField, FormValidation, LoginForm, MIN_PASSWORD_LEN,
};
pub use session::Session;
