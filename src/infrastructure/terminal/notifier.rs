//! Terminal toasts.

use colored::*;
use tracing::{info, warn};

use crate::domain::gateways::NotificationSink;

/// Prints notifications as coloured lines and mirrors them to the log.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TerminalNotifier {
    fn success(&self, text: &str) {
        info!(notification = text, "Success notification");
        println!("{}", format!("✅ {}", text).green().bold());
    }

    fn error(&self, text: &str) {
        warn!(notification = text, "Error notification");
        println!("{}", format!("❌ {}", text).red().bold());
    }
}
