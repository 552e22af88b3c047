//! Interpreter - Command line execution
//!
//! Splits a line into a command name and positional arguments, then
//! dispatches it: session-control builtins (`cd`, `exit`) run against the
//! state directly, everything else goes through the command registry.
//! There is no quoting, escaping, piping or redirection.

use crate::commands::{create_vfs_registry, CommandContext, CommandRegistry};
use crate::interpreter::builtins::{handle_cd, handle_exit};
use crate::interpreter::errors::ShellError;
use crate::interpreter::types::{ExecResult, SessionState};

/// A command line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<ParsedCommand> {
    let mut parts = line.split_whitespace().map(String::from);
    let name = parts.next()?;
    Some(ParsedCommand { name, args: parts.collect() })
}

/// Dispatches parsed command lines.
pub struct Interpreter {
    registry: CommandRegistry,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_registry(create_vfs_registry())
    }

    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Run one line to completion. Only `cd` mutates `state`.
    pub async fn execute_line(&self, state: &mut SessionState, line: &str) -> ExecResult {
        let Some(ParsedCommand { name, args }) = parse_line(line) else {
            return ExecResult::ok();
        };
        tracing::debug!(command = %name, ?args, cwd = %state.current_path, "dispatch");

        match name.as_str() {
            "cd" => return handle_cd(state, &args),
            "exit" => return handle_exit(&args),
            _ => {}
        }

        let Some(cmd) = self.registry.get(&name) else {
            let err = ShellError::UnknownCommand { name };
            return ExecResult::new(String::new(), format!("{}\n", err), err.exit_code());
        };
        let ctx = CommandContext {
            args,
            cwd: state.current_path.clone(),
            vfs: state.vfs.clone(),
        };
        cmd.execute(ctx).await.into()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
