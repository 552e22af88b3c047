//! Manifest-backed VFS store
//!
//! The manifest is a flat list of absolute entry paths. Intermediate
//! directories have no record of their own; they are derived from path
//! prefixes at query time. The store is immutable once loaded.

use std::collections::BTreeMap;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use indexmap::IndexMap;

use super::path::{child_prefix, normalize_path};
use super::types::*;

/// Path of the message-of-the-day entry shown once at load time.
pub const MOTD_PATH: &str = "/motd";

/// Loaded, read-only virtual file system.
#[derive(Debug, Clone, Default)]
pub struct VfsManifest {
    entries: IndexMap<String, VfsEntry>,
}

impl VfsManifest {
    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: label.clone(),
            source,
        })?;
        let manifest = Self::from_json(&text, &label)?;
        tracing::info!(manifest = %label, entries = manifest.len(), "loaded vfs manifest");
        Ok(manifest)
    }

    /// Parse a manifest document. `label` names the source in errors.
    pub fn from_json(text: &str, label: &str) -> Result<Self, LoadError> {
        let doc: ManifestDocument =
            serde_json::from_str(text).map_err(|source| LoadError::Malformed {
                path: label.to_string(),
                source,
            })?;
        Self::from_entries(doc.files)
    }

    /// Build from entries, normalizing paths and enforcing uniqueness.
    pub fn from_entries(files: Vec<VfsEntry>) -> Result<Self, LoadError> {
        let mut entries = IndexMap::with_capacity(files.len());
        for mut entry in files {
            if !entry.path.starts_with('/') {
                return Err(LoadError::InvalidEntry { path: entry.path });
            }
            entry.path = normalize_path(&entry.path);
            if entries.contains_key(&entry.path) {
                return Err(LoadError::DuplicatePath { path: entry.path });
            }
            entries.insert(entry.path.clone(), entry);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = &VfsEntry> {
        self.entries.values()
    }

    /// Exact lookup of an absolute path.
    pub fn lookup(&self, path: &str) -> Option<&VfsEntry> {
        self.entries.get(path)
    }

    /// True for the root, for any recorded entry, and for any implicit
    /// directory that has at least one descendant.
    pub fn exists(&self, path: &str) -> bool {
        if path == "/" || self.entries.contains_key(path) {
            return true;
        }
        let prefix = child_prefix(path);
        self.entries.keys().any(|p| p.starts_with(&prefix))
    }

    /// Direct children of `path`: directories first, then by name.
    ///
    /// An empty result is a valid listing; callers check `exists` to tell
    /// an empty directory apart from a missing one.
    pub fn list(&self, path: &str) -> Vec<DirentEntry> {
        let prefix = child_prefix(path);
        let mut children: BTreeMap<&str, EntryType> = BTreeMap::new();

        for entry in self.entries.values() {
            let Some(rest) = entry.path.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            match rest.split_once('/') {
                Some((dir, _)) => {
                    children.insert(dir, EntryType::Directory);
                }
                None => {
                    // an implicit directory wins over a same-named record
                    children.entry(rest).or_insert(entry.entry_type);
                }
            }
        }

        let mut listing: Vec<DirentEntry> = children
            .into_iter()
            .map(|(name, entry_type)| DirentEntry::new(name, entry_type))
            .collect();
        listing.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.cmp(&b.name))
        });
        listing
    }

    /// Decoded text of the top-level `motd` file, if present.
    pub fn motd(&self) -> Option<Result<String, DecodeError>> {
        self.lookup(MOTD_PATH)
            .filter(|entry| entry.is_file())
            .map(decode_content)
    }
}

/// Decode a file entry's content according to its declared encoding.
pub fn decode_content(entry: &VfsEntry) -> Result<String, DecodeError> {
    let raw = entry.content.as_deref().unwrap_or_default();
    match entry.encoding.unwrap_or_default() {
        ContentEncoding::Plain => Ok(raw.to_string()),
        ContentEncoding::Base64 => {
            let bytes = STANDARD.decode(raw.trim())?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}
