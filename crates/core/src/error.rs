//! Error types for the Lamina store.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the transactional store.
///
/// Every variant is a reported condition, not a crash: the store never
/// mutates state on the error path, so callers can surface the message
/// and keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// ROLLBACK or COMMIT was requested with no open transaction.
    #[error("no transaction in progress")]
    NoTransaction,
}
