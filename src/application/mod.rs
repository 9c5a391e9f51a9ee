//! Application layer services implementing the sign-in flow.
//!
//! This layer orchestrates domain operations by coordinating gateway calls,
//! form validation and view state. Services consume gateway traits and expose
//! a small API to whatever front end hosts the login view.
//!
//! # Available Services
//!
//! - [`services::login_workflow::LoginWorkflow`] - Single-flight login submission

pub mod services;
