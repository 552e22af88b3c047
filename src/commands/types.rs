// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;

use crate::fs::VfsManifest;
use crate::interpreter::errors::ShellError;

/// Command execution result
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

impl From<ShellError> for CommandResult {
    fn from(err: ShellError) -> Self {
        let exit_code = err.exit_code();
        Self::with_exit_code(String::new(), format!("{}\n", err), exit_code)
    }
}

/// Command execution context
pub struct CommandContext {
    pub args: Vec<String>,
    pub cwd: String,
    /// `None` when the session runs without a manifest.
    pub vfs: Option<Arc<VfsManifest>>,
}

impl CommandContext {
    /// Manifest, or a not-found error naming `arg` for VFS-less sessions.
    pub fn vfs_or_not_found(&self, command: &str, arg: &str) -> Result<&VfsManifest, ShellError> {
        self.vfs
            .as_deref()
            .ok_or_else(|| ShellError::path_not_found(command, arg))
    }
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}
