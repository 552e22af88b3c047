//! Interpreter Types
//!
//! Session state, configuration, results and the output channel.

use std::sync::Arc;

use crate::fs::VfsManifest;

/// User and host shown in prompts. Injected, never read from the process
/// environment by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            host: "localhost".to_string(),
        }
    }
}

/// Options for creating a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Prompt identity
    pub identity: Identity,
    /// Initial working path (defaults to `/`)
    pub cwd: Option<String>,
}

/// Mutable state owned by exactly one session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Always absolute and normalized; changed only by a successful `cd`.
    pub current_path: String,
    pub vfs: Option<Arc<VfsManifest>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            vfs: None,
        }
    }
}

impl SessionState {
    /// Existence check that fails every path when no manifest is loaded.
    pub fn exists(&self, path: &str) -> bool {
        self.vfs.as_ref().is_some_and(|vfs| vfs.exists(path))
    }
}

/// Result of executing one command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Set by `exit`; the caller ends the session.
    pub exit_requested: bool,
}

impl ExecResult {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, exit_requested: false }
    }

    /// Success result with no output
    pub fn ok() -> Self {
        Self::new(String::new(), String::new(), 0)
    }

    /// Failure result with stderr message
    pub fn failure(stderr: impl Into<String>) -> Self {
        Self::new(String::new(), stderr.into(), 1)
    }

    /// Result that ends the session after printing `stdout`.
    pub fn exit(stdout: impl Into<String>) -> Self {
        Self { exit_requested: true, ..Self::new(stdout.into(), String::new(), 0) }
    }

    /// Output as messages, one per line, stdout before stderr.
    pub fn messages(&self) -> Vec<OutputMessage> {
        let mut messages: Vec<OutputMessage> = self.stdout.lines().map(OutputMessage::stdout).collect();
        messages.extend(self.stderr.lines().map(OutputMessage::stderr));
        messages
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<crate::commands::CommandResult> for ExecResult {
    fn from(result: crate::commands::CommandResult) -> Self {
        Self::new(result.stdout, result.stderr, result.exit_code)
    }
}

/// Output message type (stdout or stderr)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Stdout,
    Stderr,
}

/// A single line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMessage {
    pub output_type: OutputType,
    pub data: String,
}

impl OutputMessage {
    pub fn stdout(data: impl Into<String>) -> Self {
        Self { output_type: OutputType::Stdout, data: data.into() }
    }

    pub fn stderr(data: impl Into<String>) -> Self {
        Self { output_type: OutputType::Stderr, data: data.into() }
    }
}

/// Receiver of session output. The core only appends; it never reads back.
pub trait OutputSink {
    fn emit(&mut self, message: OutputMessage);

    fn emit_all(&mut self, messages: Vec<OutputMessage>) {
        for message in messages {
            self.emit(message);
        }
    }
}

impl OutputSink for Vec<OutputMessage> {
    fn emit(&mut self, message: OutputMessage) {
        self.push(message);
    }
}
