//! Session loops: interactive REPL, pipe mode, and script mode.
//!
//! Interactive mode (stdin is a TTY) uses rustyline with history and TAB
//! completion. Pipe and script modes read raw lines and print results
//! only; they are the conformance surface for the line protocol.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use lamina_executor::{Command, Executor};

use crate::format::{format_error, format_output};

/// Whether the session should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Execute one raw input line and print its result.
///
/// Blank lines are skipped. Returns [`Flow::Stop`] only for a
/// well-formed `END`; every error is reported and the session goes on.
fn process_line(executor: &mut Executor, line: &str) -> Flow {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Flow::Continue;
    }

    let cmd = match Command::parse(&tokens) {
        Ok(cmd) => cmd,
        Err(e) => {
            println!("{}", format_error(&e));
            return Flow::Continue;
        }
    };

    if cmd == Command::End {
        return Flow::Stop;
    }

    match executor.execute(cmd) {
        Ok(output) => {
            let text = format_output(&output);
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Err(e) => println!("{}", format_error(&e)),
    }
    Flow::Continue
}

/// Run in pipe mode: read lines from stdin until END or EOF.
pub fn run_pipe(executor: &mut Executor) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if process_line(executor, &line) == Flow::Stop {
            break;
        }
    }
}

/// Run a script file as one session.
pub fn run_script(executor: &mut Executor, path: &Path) -> io::Result<()> {
    let content = fs::read_to_string(path)?;
    for line in content.lines() {
        if process_line(executor, line) == Flow::Stop {
            break;
        }
    }
    Ok(())
}

/// Run the interactive REPL.
pub fn run_repl(executor: &mut Executor) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<LaminaHelper, _> = Editor::with_config(config).unwrap();
    rl.set_helper(Some(LaminaHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        let prompt = if executor.depth() > 0 { "(txn)> " } else { "> " };
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                // Meta-commands, interactive only. Lowercase, so they can
                // never shadow the uppercase wire commands.
                match trimmed {
                    "quit" | "exit" => break,
                    "help" => {
                        print_help();
                        continue;
                    }
                    "clear" => {
                        // ANSI clear screen
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    _ => {}
                }

                if process_line(executor, trimmed) == Flow::Stop {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D — exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.lamina_history", h))
}

fn print_help() {
    println!("Commands:");
    println!("  SET key value   Write a value into the current scope");
    println!("  GET key         Print the effective value, or NULL");
    println!("  UNSET key       Delete a key in the current scope");
    println!("  COUNTS value    Count keys holding the value");
    println!("  FIND value      List keys holding the value, sorted");
    println!("  BEGIN           Open a nested transaction");
    println!("  ROLLBACK        Discard the innermost transaction");
    println!("  COMMIT          Merge the innermost transaction into its parent");
    println!("  END             Terminate the session");
    println!();
    println!("Meta-commands:");
    println!("  help            Show this help");
    println!("  clear           Clear screen");
    println!("  quit / exit     Exit");
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Wire commands offered for TAB completion.
const COMMANDS: &[&str] = &[
    "SET", "GET", "UNSET", "COUNTS", "FIND", "BEGIN", "ROLLBACK", "COMMIT", "END",
];

struct LaminaHelper;

impl Helper for LaminaHelper {}
impl Validator for LaminaHelper {}
impl Highlighter for LaminaHelper {}
impl Hinter for LaminaHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for LaminaHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];

        // Only the command position completes; arguments are free-form.
        if line_to_pos.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let candidates: Vec<Pair> = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line_to_pos))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}
