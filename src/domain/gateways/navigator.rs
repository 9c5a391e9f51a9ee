//! Boundary to the view router.

/// Redirects the user to another view.
///
/// Fire-and-forget: if the hosting view is already gone the implementation
/// may silently skip the redirect.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}
