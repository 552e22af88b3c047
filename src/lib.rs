//! vfs-shell - A minimal shell over a manifest-defined virtual file system
//!
//! This library provides the core of an emulated command shell: a read-only
//! VFS loaded from a flat JSON manifest, a command interpreter with `cd`,
//! `ls`, `cat`, `pwd`, `help` and `exit`, and a scheduler that replays
//! startup scripts with terminal-like pacing.

pub mod commands;
pub mod fs;
pub mod interpreter;
pub mod scheduler;
pub mod session;

pub use fs::{VfsEntry, VfsManifest};
pub use interpreter::{ExecResult, Identity, OutputMessage, OutputSink, OutputType, SessionOptions};
pub use scheduler::{SchedulerOptions, ScriptOutcome, ScriptScheduler};
pub use session::Session;
