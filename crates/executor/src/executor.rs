//! Command execution against an owned store instance.

use tracing::debug;

use lamina_engine::TransactionalStore;

use crate::{Command, Output, Result};

/// Executes commands against a [`TransactionalStore`] it owns.
///
/// The executor constructs its own store — there is no process-wide
/// instance — and one executor serves one session. Each command maps to
/// exactly one store operation; a command that fails leaves the scope
/// stack exactly as it was.
#[derive(Debug, Default)]
pub struct Executor {
    store: TransactionalStore,
}

impl Executor {
    /// Create an executor over a fresh, empty store.
    pub fn new() -> Self {
        Self {
            store: TransactionalStore::new(),
        }
    }

    /// Current transaction nesting depth of the underlying store.
    pub fn depth(&self) -> usize {
        self.store.depth()
    }

    /// Execute one command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(?cmd, "execute");
        match cmd {
            Command::Set { key, value } => {
                self.store.set(&key, &value);
                Ok(Output::Unit)
            }
            Command::Get { key } => Ok(Output::Maybe(self.store.get(&key).map(str::to_string))),
            Command::Unset { key } => {
                self.store.unset(&key);
                Ok(Output::Unit)
            }
            Command::Counts { value } => Ok(Output::Uint(self.store.counts(&value) as u64)),
            Command::Find { value } => Ok(Output::Keys(self.store.find(&value))),
            Command::Begin => {
                self.store.begin();
                Ok(Output::Unit)
            }
            Command::Rollback => {
                self.store.rollback()?;
                Ok(Output::Unit)
            }
            Command::Commit => {
                self.store.commit()?;
                Ok(Output::Unit)
            }
            // Session shutdown is the line loop's concern.
            Command::End => Ok(Output::Unit),
        }
    }
}
