//! Boundary to transient user notifications (toasts).

/// Shows short-lived success and error messages to the user.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn success(&self, text: &str);

    fn error(&self, text: &str);
}
