//! exit - End the session

use crate::interpreter::types::ExecResult;

/// Printed when the session ends.
pub const FAREWELL: &str = "Shutting down the shell emulator.";

/// Handle the exit builtin command. Arguments are ignored.
pub fn handle_exit(_args: &[String]) -> ExecResult {
    ExecResult::exit(format!("{}\n", FAREWELL))
}
