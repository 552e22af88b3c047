//! Shell Errors
//!
//! Every error is session-local: it renders as one output line and the
//! session continues with the next input.

use std::io;

use thiserror::Error;

use crate::fs::DecodeError;

/// Errors raised by a single command line.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{command}: {path}: no such file or directory")]
    PathNotFound { command: String, path: String },

    #[error("{command}: {path}: {source}")]
    Decode {
        command: String,
        path: String,
        #[source]
        source: DecodeError,
    },

    #[error("usage: {usage}")]
    Usage { usage: String },

    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },
}

impl ShellError {
    pub fn path_not_found(command: &str, path: &str) -> Self {
        ShellError::PathNotFound {
            command: command.to_string(),
            path: path.to_string(),
        }
    }

    /// Exit status reported alongside the message.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::PathNotFound { .. } | ShellError::Decode { .. } => 1,
            ShellError::Usage { .. } => 2,
            ShellError::UnknownCommand { .. } => 127,
        }
    }
}

/// The startup script could not be read; no step of it runs.
#[derive(Error, Debug)]
#[error("cannot read script '{path}': {source}")]
pub struct ScriptReadError {
    pub path: String,
    #[source]
    pub source: io::Error,
}
