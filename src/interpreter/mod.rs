//! Interpreter module
//!
//! Command line parsing, dispatch and session state.

pub mod builtins;
pub mod errors;
pub mod interpreter;
pub mod types;

pub use errors::*;
pub use interpreter::{parse_line, Interpreter, ParsedCommand};
pub use types::*;
