use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

/// Every built-in with its one-line description, sorted by name.
pub const BUILTINS: &[(&str, &str)] = &[
    ("cat", "cat <file>      print the contents of a file"),
    ("cd", "cd [path]       change the current directory (default: /)"),
    ("exit", "exit            end the session"),
    ("help", "help            show this list"),
    ("ls", "ls [path]       list a directory (default: current directory)"),
    ("pwd", "pwd             print the current directory"),
];

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        let mut stdout = String::from("Available commands:\n");
        for (_, line) in BUILTINS {
            stdout.push_str(&format!("  {}\n", line));
        }
        CommandResult::success(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_ctx(args: Vec<&str>) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            cwd: "/".to_string(),
            vfs: None,
        }
    }

    #[tokio::test]
    async fn test_list_commands() {
        let result = HelpCommand.execute(create_ctx(vec![])).await;
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.starts_with("Available commands:\n"));
        for (name, _) in BUILTINS {
            assert!(result.stdout.contains(&format!("  {} ", name)), "missing {}", name);
        }
    }

    #[tokio::test]
    async fn test_help_ignores_args() {
        let plain = HelpCommand.execute(create_ctx(vec![])).await;
        let with_args = HelpCommand.execute(create_ctx(vec!["ls"])).await;
        assert_eq!(plain, with_args);
    }

    #[test]
    fn test_builtins_sorted() {
        let names: Vec<&str> = BUILTINS.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
