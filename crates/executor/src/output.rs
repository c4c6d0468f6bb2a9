//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is
//! deterministic and documented on the command definitions; only the
//! carried values depend on store state.

use serde::{Deserialize, Serialize};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (SET, UNSET, transaction control, END).
    Unit,

    /// Optional value (GET on a key that may be absent or tombstoned).
    /// `None` is rendered as the absent-value sentinel by the caller.
    Maybe(Option<String>),

    /// Unsigned count (COUNTS).
    Uint(u64),

    /// Matching keys, sorted ascending, no duplicates (FIND). May be
    /// empty; the caller renders the empty case as the sentinel.
    Keys(Vec<String>),
}
