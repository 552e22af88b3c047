//! Shell Session
//!
//! Main entry point for the emulated shell.
//! Ties together the manifest, the session state and the interpreter.

use std::path::Path;
use std::sync::Arc;

use crate::fs::{normalize_path, VfsManifest};
use crate::interpreter::{
    ExecResult, Identity, Interpreter, OutputMessage, OutputSink, SessionOptions, SessionState,
};

/// One interactive or scripted shell session.
pub struct Session {
    state: SessionState,
    identity: Identity,
    interpreter: Interpreter,
}

impl Session {
    /// Create a session without a manifest.
    pub fn new(options: SessionOptions) -> Self {
        let state = SessionState {
            current_path: options.cwd.as_deref().map(normalize_path).unwrap_or_else(|| "/".to_string()),
            vfs: None,
        };
        Self {
            state,
            identity: options.identity,
            interpreter: Interpreter::new(),
        }
    }

    /// Create a session and load the manifest at `manifest`, if any.
    ///
    /// A load failure is reported to `out` and leaves the session without a
    /// VFS; it never aborts.
    pub fn open(options: SessionOptions, manifest: Option<&Path>, out: &mut dyn OutputSink) -> Self {
        let mut session = Self::new(options);
        if let Some(path) = manifest {
            match VfsManifest::load(path) {
                Ok(vfs) => session.attach_vfs(vfs, out),
                Err(e) => {
                    tracing::warn!(error = %e, "vfs load failed");
                    out.emit(OutputMessage::stderr(format!("vfs: {}", e)));
                }
            }
        }
        session
    }

    /// Install a manifest and print its motd, if it has one.
    pub fn attach_vfs(&mut self, vfs: VfsManifest, out: &mut dyn OutputSink) {
        match vfs.motd() {
            Some(Ok(text)) => out.emit_all(text.lines().map(OutputMessage::stdout).collect()),
            Some(Err(e)) => out.emit(OutputMessage::stderr(format!("motd: {}", e))),
            None => {}
        }
        self.state.vfs = Some(Arc::new(vfs));
    }

    /// Execute one command line.
    pub async fn exec(&mut self, line: &str) -> ExecResult {
        self.interpreter.execute_line(&mut self.state, line).await
    }

    /// Prompt shown before each command, e.g. `user@localhost:/home$ `.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.identity.user, self.identity.host, self.state.current_path)
    }

    /// Get the current path.
    pub fn cwd(&self) -> &str {
        &self.state.current_path
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}
