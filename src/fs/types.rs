//! File System Types
//!
//! Core types for the manifest-backed virtual file system.

use std::io;
use std::string::FromUtf8Error;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a VFS manifest.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read manifest '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed manifest '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid entry path '{path}': must start with '/'")]
    InvalidEntry { path: String },

    #[error("duplicate entry path '{path}'")]
    DuplicatePath { path: String },
}

/// Errors raised while decoding a file entry's content.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("content is not valid UTF-8 text")]
    Utf8(#[from] FromUtf8Error),
}

/// Kind of a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

impl EntryType {
    /// Marker used in `ls` output.
    pub fn marker(self) -> char {
        match self {
            EntryType::Directory => 'd',
            EntryType::File => '-',
        }
    }
}

/// How a file entry's `content` is stored in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEncoding {
    #[default]
    #[serde(alias = "utf8", alias = "utf-8")]
    Plain,
    Base64,
}

/// A single record of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VfsEntry {
    /// Display hint only; `path` is authoritative.
    #[serde(default)]
    pub name: Option<String>,
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<ContentEncoding>,
}

impl VfsEntry {
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Last path segment, or `/` for the root.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(pos) if pos + 1 < self.path.len() => &self.path[pos + 1..],
            _ => "/",
        }
    }
}

/// On-disk shape of the manifest document.
#[derive(Debug, Deserialize)]
pub(crate) struct ManifestDocument {
    pub files: Vec<VfsEntry>,
}

/// Directory entry produced by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub entry_type: EntryType,
}

impl DirentEntry {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        Self { name: name.into(), entry_type }
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}
