//! Clap definition for the `lamina` binary's own arguments.
//!
//! The line protocol itself is not expressed as clap subcommands: its
//! tokens are parsed by `lamina-executor`, which owns the wire-level
//! arity rules.

use clap::{Arg, Command};

/// Build the binary's argument parser.
pub fn build_cli() -> Command {
    Command::new("lamina")
        .about("In-memory key-value store with nested transactions")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Execute commands from a script file instead of stdin"),
        )
}
