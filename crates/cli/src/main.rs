//! lamina — line-oriented interface to the transactional store.
//!
//! Three modes:
//! - **Script mode**: `lamina FILE` — execute the file's lines, exit
//! - **REPL mode**: `lamina` with a TTY on stdin — interactive prompt
//! - **Pipe mode**: `echo "GET a" | lamina` — line-by-line from stdin

mod commands;
mod format;
mod repl;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use lamina_executor::Executor;

use commands::build_cli;

fn main() {
    // Diagnostics go to stderr; stdout carries only session output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let mut executor = Executor::new();

    if let Some(file) = matches.get_one::<String>("file") {
        if let Err(e) = repl::run_script(&mut executor, Path::new(file)) {
            eprintln!("Failed to read {}: {}", file, e);
            process::exit(1);
        }
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut executor);
    } else {
        repl::run_pipe(&mut executor);
    }
}
