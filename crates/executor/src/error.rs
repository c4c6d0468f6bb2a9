//! Error types for command parsing and execution.
//!
//! Every variant is a reported-and-continue condition for the session:
//! none of them ends the process, and none leaves the scope stack
//! partially mutated.

use serde::{Deserialize, Serialize};

/// Result alias for command-layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Command-layer errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// A known command was given the wrong number of arguments. Reported
    /// before any store operation runs, so state is untouched.
    #[error("{command} requires {expected} argument(s), got {actual}")]
    Arity {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// Token 0 of the line names no known command (names are
    /// case-sensitive).
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// ROLLBACK or COMMIT with no open transaction.
    #[error("no active transaction")]
    TransactionNotActive,
}

impl From<lamina_core::Error> for Error {
    fn from(e: lamina_core::Error) -> Self {
        match e {
            lamina_core::Error::NoTransaction => Error::TransactionNotActive,
        }
    }
}
