//! Session-control builtins
//!
//! Builtins that touch session state directly rather than going through
//! the command registry.

pub mod cd_cmd;
pub mod exit_cmd;

pub use cd_cmd::handle_cd;
pub use exit_cmd::handle_exit;
