//! Login submission workflow.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use metrics::counter;
use tracing::{debug, info, warn};

use crate::domain::entities::{FormValidation, LoginForm, Session};
use crate::domain::gateways::{AuthGateway, Navigator, NotificationSink};

/// Toast shown after a successful sign-in.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// Shown when the backend rejects a login without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Invalid email or password";

/// Route the user lands on once authenticated.
pub const DEFAULT_LANDING_ROUTE: &str = "users";

/// Shown while a login request is outstanding.
pub const SIGNING_IN_MESSAGE: &str = "Signing you in...";

const SUBMISSIONS_METRIC: &str = "admin_login_submissions_total";

/// Loading/error state of the login view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_submitting: bool,
    pub error_message: Option<String>,
}

impl SubmissionState {
    /// Line the view shows under the form: progress while in flight,
    /// otherwise the last error, if any.
    pub fn status_text(&self) -> Option<&str> {
        if self.is_submitting {
            Some(SIGNING_IN_MESSAGE)
        } else {
            self.error_message.as_deref()
        }
    }
}

/// Result of a single call to [`LoginWorkflow::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Local validation failed; all fields were marked touched.
    Invalid(FormValidation),
    /// Another submission was already in flight.
    Ignored,
    /// The backend accepted the credentials and the user was redirected.
    Authenticated(Session),
    /// The backend refused or could not be reached; the message is on display.
    Failed { message: String },
}

/// Mediates between the login form and the authentication backend.
///
/// Guarantees at most one login request in flight per instance and exactly one
/// user-visible outcome per accepted attempt: either a success toast followed
/// by a redirect, or an inline error mirrored to an error toast.
///
/// State lives behind a mutex that is never held across an `.await`, so the
/// workflow can be shared through `Arc` between event handlers.
pub struct LoginWorkflow<A: AuthGateway, N: Navigator, S: NotificationSink> {
    gateway: Arc<A>,
    navigator: Arc<N>,
    notifier: Arc<S>,
    landing_route: String,
    state: Mutex<SubmissionState>,
}

impl<A: AuthGateway, N: Navigator, S: NotificationSink> LoginWorkflow<A, N, S> {
    /// Creates a workflow in the clean state, redirecting to
    /// [`DEFAULT_LANDING_ROUTE`] after sign-in.
    pub fn new(gateway: Arc<A>, navigator: Arc<N>, notifier: Arc<S>) -> Self {
        Self {
            gateway,
            navigator,
            notifier,
            landing_route: DEFAULT_LANDING_ROUTE.to_string(),
            state: Mutex::new(SubmissionState::default()),
        }
    }

    /// Overrides the route used after a successful sign-in.
    pub fn with_landing_route(mut self, route: impl Into<String>) -> Self {
        self.landing_route = route.into();
        self
    }

    pub fn landing_route(&self) -> &str {
        &self.landing_route
    }

    /// Returns a copy of the current view state.
    pub fn state(&self) -> SubmissionState {
        lock(&self.state).clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.state).is_submitting
    }

    pub fn error_message(&self) -> Option<String> {
        lock(&self.state).error_message.clone()
    }

    /// Closes the inline error banner.
    pub fn dismiss_error(&self) {
        lock(&self.state).error_message = None;
    }

    /// Redirects away from the login view if a valid session already exists.
    ///
    /// Call once when the view is first shown. Returns `true` when the
    /// redirect fired, in which case the form must not be made interactive.
    pub fn check_existing_session(&self) -> bool {
        if !self.gateway.is_authenticated() {
            debug!("No existing session; showing login form");
            return false;
        }

        info!(route = %self.landing_route, "Existing session found; skipping login form");
        self.navigator.navigate_to(&self.landing_route);
        true
    }

    /// Submits the form.
    ///
    /// # Flow
    ///
    /// 1. Clear the previous error, unless a submission is already running
    /// 2. Invalid form: mark every field touched and return without any request
    /// 3. Submission already in flight: return [`SubmitOutcome::Ignored`]
    /// 4. Raise the in-flight flag, call the backend
    /// 5. Lower the flag, then either toast success and redirect, or record the
    ///    error message and toast it
    ///
    /// The in-flight flag is lowered on every exit path, including when the
    /// returned future is dropped before the backend answers.
    pub async fn submit(&self, form: &mut LoginForm) -> SubmitOutcome {
        {
            let mut state = lock(&self.state);
            if !state.is_submitting {
                state.error_message = None;
            }
        }

        let validation = form.validate();
        if !validation.is_valid() {
            form.mark_all_as_touched();
            counter!(SUBMISSIONS_METRIC, "outcome" => "invalid").increment(1);
            debug!(?validation, "Login form failed local validation");
            return SubmitOutcome::Invalid(validation);
        }

        let Some(in_flight) = InFlight::acquire(&self.state) else {
            counter!(SUBMISSIONS_METRIC, "outcome" => "ignored").increment(1);
            debug!("Login already in flight; submit ignored");
            return SubmitOutcome::Ignored;
        };

        let result = {
            let credentials = form.credentials();
            info!("Dispatching login request");
            self.gateway.login(&credentials).await
        };

        match result {
            Ok(session) => {
                in_flight.finish(None);
                counter!(SUBMISSIONS_METRIC, "outcome" => "success").increment(1);
                info!(route = %self.landing_route, "Login succeeded");

                // The redirect may tear the view down, so toast first.
                self.notifier.success(LOGIN_SUCCESS_MESSAGE);
                self.navigator.navigate_to(&self.landing_route);

                SubmitOutcome::Authenticated(session)
            }
            Err(err) => {
                counter!(SUBMISSIONS_METRIC, "outcome" => "failure").increment(1);
                warn!(error = %err, "Login failed");

                let message = err
                    .message()
                    .map_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string(), str::to_string);

                in_flight.finish(Some(message.clone()));
                self.notifier.error(&message);

                SubmitOutcome::Failed { message }
            }
        }
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scoped ownership of the in-flight flag.
///
/// Dropping the guard lowers the flag. [`InFlight::finish`] lowers it and
/// records the outcome under one lock.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    finished: bool,
}

impl<'a> InFlight<'a> {
    /// Raises the flag and clears the previous error, unless a submission is
    /// already running.
    fn acquire(state: &'a Mutex<SubmissionState>) -> Option<Self> {
        let mut guard = lock(state);
        if guard.is_submitting {
            return None;
        }

        guard.is_submitting = true;
        guard.error_message = None;

        Some(Self {
            state,
            finished: false,
        })
    }

    fn finish(mut self, error_message: Option<String>) {
        let mut state = lock(self.state);
        state.is_submitting = false;
        state.error_message = error_message;
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            lock(self.state).is_submitting = false;
        }
    }
}
