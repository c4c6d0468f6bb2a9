//! Output/Error → wire text.
//!
//! The session prints the line protocol's exact literals: `NULL` for
//! absent values and empty FIND results, `NO TRANSACTION` for
//! transaction control outside a transaction, and `ERROR: ...` reports
//! for malformed lines. All of it goes to stdout; logging stays on
//! stderr.

use lamina_executor::{Error, Output};

/// Literal printed for an absent value or an empty FIND result.
pub const NULL: &str = "NULL";

/// Render a successful output. An empty string means "print nothing".
pub fn format_output(output: &Output) -> String {
    match output {
        Output::Unit => String::new(),
        Output::Maybe(Some(value)) => value.clone(),
        Output::Maybe(None) => NULL.to_string(),
        Output::Uint(n) => n.to_string(),
        Output::Keys(keys) if keys.is_empty() => NULL.to_string(),
        Output::Keys(keys) => keys.join(" "),
    }
}

/// Render a reported error.
pub fn format_error(err: &Error) -> String {
    match err {
        Error::TransactionNotActive => "NO TRANSACTION".to_string(),
        Error::Arity {
            command, expected, ..
        } => format!(
            "ERROR: {} requires {} argument{}.",
            command,
            expected,
            if *expected == 1 { "" } else { "s" }
        ),
        Error::UnknownCommand { name } => format!("ERROR: Unknown command '{}'", name),
    }
}
