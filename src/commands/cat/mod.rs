// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{decode_content, resolve_path};
use crate::interpreter::errors::ShellError;

pub struct CatCommand;

fn read(ctx: &CommandContext) -> Result<String, ShellError> {
    let Some(arg) = ctx.args.first() else {
        return Err(ShellError::Usage { usage: "cat <file>".to_string() });
    };
    let vfs = ctx.vfs_or_not_found("cat", arg)?;
    let path = resolve_path(arg, &ctx.cwd);

    let entry = vfs
        .lookup(&path)
        .filter(|e| e.is_file())
        .ok_or_else(|| ShellError::path_not_found("cat", arg))?;

    let mut content = decode_content(entry).map_err(|source| ShellError::Decode {
        command: "cat".to_string(),
        path: arg.clone(),
        source,
    })?;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        match read(&ctx) {
            Ok(stdout) => CommandResult::success(stdout),
            Err(e) => e.into(),
        }
    }
}
