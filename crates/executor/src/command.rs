//! Command enum defining the store's operation surface.
//!
//! Commands are the instruction set of the interpreter. They are:
//! - **Self-contained**: all parameters are in the variant
//! - **Serializable**: convertible to/from JSON
//! - **Pure data**: no closures or executable code
//!
//! Parsing owns arity validation, so the executor only ever sees
//! well-formed commands.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A parsed command.
///
/// Token 0 of an input line selects the variant (case-sensitive,
/// uppercase); the remaining tokens fill its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Write a value into the innermost scope.
    /// Returns: `Output::Unit`
    Set { key: String, value: String },

    /// Read a key's effective value.
    /// Returns: `Output::Maybe`
    Get { key: String },

    /// Tombstone a key in the innermost scope.
    /// Returns: `Output::Unit`
    Unset { key: String },

    /// Count keys whose effective value matches.
    /// Returns: `Output::Uint`
    Counts { value: String },

    /// List keys whose effective value matches, sorted ascending.
    /// Returns: `Output::Keys`
    Find { value: String },

    /// Open a nested transaction.
    /// Returns: `Output::Unit`
    Begin,

    /// Discard the innermost transaction.
    /// Returns: `Output::Unit`
    Rollback,

    /// Fold the innermost transaction into its parent.
    /// Returns: `Output::Unit`
    Commit,

    /// Terminate the session. The line loop acts on this; the executor
    /// treats it as a no-op.
    /// Returns: `Output::Unit`
    End,
}

impl Command {
    /// Parse one whitespace-split input line.
    ///
    /// Arity is validated here for every known command, including the
    /// zero-argument ones: `BEGIN extra` is an arity error, not a
    /// silently truncated `BEGIN`. Callers are expected to skip blank
    /// lines before calling.
    pub fn parse(tokens: &[&str]) -> Result<Self, Error> {
        let name = tokens.first().copied().unwrap_or_default();
        let args = tokens.get(1..).unwrap_or_default();

        let arity = |expected: usize| -> Result<(), Error> {
            if args.len() == expected {
                Ok(())
            } else {
                Err(Error::Arity {
                    command: name.to_string(),
                    expected,
                    actual: args.len(),
                })
            }
        };

        match name {
            "SET" => {
                arity(2)?;
                Ok(Command::Set {
                    key: args[0].to_string(),
                    value: args[1].to_string(),
                })
            }
            "GET" => {
                arity(1)?;
                Ok(Command::Get {
                    key: args[0].to_string(),
                })
            }
            "UNSET" => {
                arity(1)?;
                Ok(Command::Unset {
                    key: args[0].to_string(),
                })
            }
            "COUNTS" => {
                arity(1)?;
                Ok(Command::Counts {
                    value: args[0].to_string(),
                })
            }
            "FIND" => {
                arity(1)?;
                Ok(Command::Find {
                    value: args[0].to_string(),
                })
            }
            "BEGIN" => {
                arity(0)?;
                Ok(Command::Begin)
            }
            "ROLLBACK" => {
                arity(0)?;
                Ok(Command::Rollback)
            }
            "COMMIT" => {
                arity(0)?;
                Ok(Command::Commit)
            }
            "END" => {
                arity(0)?;
                Ok(Command::End)
            }
            other => Err(Error::UnknownCommand {
                name: other.to_string(),
            }),
        }
    }
}
