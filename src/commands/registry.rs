// src/commands/registry.rs
use std::collections::BTreeMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::pwd::PwdCommand;

/// Register every VFS-reading command.
pub fn register_vfs_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(PwdCommand));
}

/// Create a registry with every VFS-reading command.
pub fn create_vfs_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_vfs_commands(&mut registry);
    registry
}
