//! Business logic services for the application layer.

pub mod login_workflow;

pub use login_workflow::{
    DEFAULT_FAILURE_MESSAGE, DEFAULT_LANDING_ROUTE, LOGIN_SUCCESS_MESSAGE, LoginWorkflow,
    SIGNING_IN_MESSAGE, SubmissionState, SubmitOutcome,
};
