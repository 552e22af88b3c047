// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_path, DirentEntry};
use crate::interpreter::errors::ShellError;

pub struct LsCommand;

/// Message printed for an existing directory with no children.
pub const EMPTY_LISTING: &str = "(empty directory)";

fn format_entry(entry: &DirentEntry) -> String {
    format!("{} {}\n", entry.entry_type.marker(), entry.name)
}

fn list(ctx: &CommandContext) -> Result<String, ShellError> {
    let arg = ctx.args.first().map(String::as_str).unwrap_or(ctx.cwd.as_str());
    let vfs = ctx.vfs_or_not_found("ls", arg)?;
    let target = resolve_path(arg, &ctx.cwd);

    if !vfs.exists(&target) {
        return Err(ShellError::path_not_found("ls", arg));
    }

    // A file entry lists as itself, like `ls file.txt`.
    if let Some(entry) = vfs.lookup(&target).filter(|e| e.is_file()) {
        return Ok(format_entry(&DirentEntry::new(entry.file_name(), entry.entry_type)));
    }

    let entries = vfs.list(&target);
    if entries.is_empty() {
        return Ok(format!("{}\n", EMPTY_LISTING));
    }
    Ok(entries.iter().map(format_entry).collect())
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        match list(&ctx) {
            Ok(stdout) => CommandResult::success(stdout),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VfsManifest;
    use std::sync::Arc;

    const MANIFEST: &str = r#"{"files": [
        {"path": "/home/user/notes.txt", "type": "file", "content": "n"},
        {"path": "/home/user/projects/a.rs", "type": "file", "content": ""},
        {"path": "/home/guest", "type": "directory"},
        {"path": "/readme.md", "type": "file", "content": "r"}
    ]}"#;

    fn make_ctx(args: Vec<&str>, cwd: &str) -> CommandContext {
        let vfs = VfsManifest::from_json(MANIFEST, "test").unwrap();
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            cwd: cwd.to_string(),
            vfs: Some(Arc::new(vfs)),
        }
    }

    #[tokio::test]
    async fn test_ls_root() {
        let result = LsCommand.execute(make_ctx(vec![], "/")).await;
        assert_eq!(result.stdout, "d home\n- readme.md\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_ls_relative_arg() {
        let result = LsCommand.execute(make_ctx(vec!["user"], "/home")).await;
        assert_eq!(result.stdout, "d projects\n- notes.txt\n");
    }

    #[tokio::test]
    async fn test_ls_parent() {
        let result = LsCommand.execute(make_ctx(vec![".."], "/home/user")).await;
        assert_eq!(result.stdout, "d guest\nd user\n");
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let result = LsCommand.execute(make_ctx(vec!["/home/guest"], "/")).await;
        assert_eq!(result.stdout, format!("{}\n", EMPTY_LISTING));
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_ls_file() {
        let result = LsCommand.execute(make_ctx(vec!["readme.md"], "/")).await;
        assert_eq!(result.stdout, "- readme.md\n");
    }

    #[tokio::test]
    async fn test_ls_missing() {
        let result = LsCommand.execute(make_ctx(vec!["/missing"], "/")).await;
        assert!(result.stdout.is_empty());
        assert_eq!(result.stderr, "ls: /missing: no such file or directory\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_ls_without_vfs() {
        let ctx = CommandContext { args: vec![], cwd: "/".to_string(), vfs: None };
        let result = LsCommand.execute(ctx).await;
        assert_eq!(result.stderr, "ls: /: no such file or directory\n");
    }
}
