//! Terminal front-end collaborators.
//!
//! Used by the `mindfit-admin` binary in place of a browser router and toast
//! service.

mod navigator;
mod notifier;

pub use navigator::TerminalNavigator;
pub use notifier::TerminalNotifier;
