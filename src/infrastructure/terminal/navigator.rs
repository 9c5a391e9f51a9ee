//! Terminal stand-in for the view router.

use std::sync::{Mutex, PoisonError};

use colored::*;
use tracing::info;

use crate::domain::gateways::Navigator;

/// Prints redirects and remembers the last route.
#[derive(Default)]
pub struct TerminalNavigator {
    current: Mutex<Option<String>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route of the most recent redirect.
    pub fn current_route(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate_to(&self, route: &str) {
        info!(route, "Navigating");
        println!("  {} /{}", "→".bright_black(), route.bright_cyan().bold());

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_last_route() {
        let navigator = TerminalNavigator::new();
        assert!(navigator.current_route().is_none());

        navigator.navigate_to("users");

        assert_eq!(navigator.current_route().as_deref(), Some("users"));
    }
}
