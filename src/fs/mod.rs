//! File System Module
//!
//! Read-only virtual file system described by a flat JSON manifest:
//! - types: manifest records and errors
//! - path: normalization and resolution against a current path
//! - manifest: lookup, existence checks and directory synthesis

pub mod manifest;
pub mod path;
pub mod types;

pub use manifest::{decode_content, VfsManifest, MOTD_PATH};
pub use path::{normalize_path, resolve_path};
pub use types::*;
