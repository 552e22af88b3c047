// src/commands/mod.rs
pub mod cat;
pub mod help_cmd;
pub mod ls;
pub mod pwd;
pub mod registry;
pub mod types;

pub use registry::{create_vfs_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
