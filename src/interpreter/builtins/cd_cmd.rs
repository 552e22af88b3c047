//! cd - Change the current path
//!
//! Supports:
//! - cd        - return to the root
//! - cd [path] - absolute or relative to the current path, `.`/`..` allowed

use crate::fs::resolve_path;
use crate::interpreter::errors::ShellError;
use crate::interpreter::types::{ExecResult, SessionState};

/// Handle the cd builtin command
pub fn handle_cd(state: &mut SessionState, args: &[String]) -> ExecResult {
    let Some(target) = args.first() else {
        state.current_path = "/".to_string();
        return ExecResult::ok();
    };

    let new_path = resolve_path(target, &state.current_path);
    if !state.exists(&new_path) {
        // Report the argument as typed, not the resolved path.
        let err = ShellError::path_not_found("cd", target);
        return ExecResult::failure(format!("{}\n", err));
    }

    tracing::debug!(from = %state.current_path, to = %new_path, "cd");
    state.current_path = new_path;
    ExecResult::ok()
}
