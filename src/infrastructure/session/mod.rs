//! Local session storage.
//!
//! Provides a [`SessionStore`] trait with two implementations:
//! - [`MemorySessionStore`] - Process-lifetime storage
//! - [`FileSessionStore`] - JSON file, survives restarts

mod file_store;
mod memory_store;
mod store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
pub use store::SessionStore;

#[cfg(test)]
pub use store::MockSessionStore;
