//! Logging setup.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with prompts and toasts on
/// stdout. `log_format` is `text` or `json`, as checked by
/// [`crate::config::Config::validate`].
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("Invalid log filter '{log_level}'"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
