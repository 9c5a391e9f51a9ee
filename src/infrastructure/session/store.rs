//! Session store trait.

use crate::domain::entities::Session;
use crate::error::AppError;

/// Local holder of the current session.
///
/// Plays the part browser storage plays for a web front end: the
/// authentication gateway writes the session after a successful login and
/// reads it back to decide whether the user is already signed in.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::MemorySessionStore`] - Process-lifetime storage
/// - [`crate::infrastructure::session::FileSessionStore`] - JSON file on disk
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionIo`] or [`AppError::SessionFormat`] when the
    /// backing storage cannot be read.
    fn load(&self) -> Result<Option<Session>, AppError>;

    /// Replaces the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionIo`] when the backing storage cannot be written.
    fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Removes the stored session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionIo`] when the backing storage cannot be written.
    fn clear(&self) -> Result<(), AppError>;
}
