//! Command layer for the Lamina store.
//!
//! [`Command`] is the instruction set of the line protocol: every input
//! line parses to exactly one variant, with arity validated at parse
//! time. [`Executor`] owns a [`lamina_engine::TransactionalStore`] and
//! maps each command to one store operation, producing an [`Output`] or
//! a reported [`Error`].
//!
//! Commands, outputs, and errors are plain serializable data — no
//! closures, no handles — so the surface also has a JSON form for
//! embedding.

mod command;
mod error;
mod executor;
mod output;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
