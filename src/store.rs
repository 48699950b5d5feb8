//! Blocklist data model and file persistence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{Result, UfwbanError};

/// A validated IP address in canonical form.
///
/// The string form (Display and serde) is the normalized rendering of
/// the parsed address, so `2001:0DB8::1` and `2001:db8::1` persist
/// identically and can never coexist in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockEntry(IpAddr);

impl BlockEntry {
    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl From<IpAddr> for BlockEntry {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

impl fmt::Display for BlockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordered collection of unique blocked addresses.
///
/// Insertion order is preserved and duplicates are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    entries: Vec<BlockEntry>,
}

impl Blocklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw entries, keeping the first occurrence of
    /// any duplicate. The writer never produces duplicates itself, so
    /// this only triggers on hand-edited files.
    pub fn from_entries(entries: Vec<BlockEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            if !list.insert(entry) {
                tracing::warn!("Ignoring duplicate blocklist entry: {}", entry);
            }
        }
        list
    }

    pub fn contains(&self, entry: &BlockEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Append an entry. Returns false if it was already present.
    pub fn insert(&mut self, entry: BlockEntry) -> bool {
        if self.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove an entry. Returns false if it was not present.
    pub fn remove(&mut self, entry: &BlockEntry) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[BlockEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// File-backed store for a [`Blocklist`].
///
/// The on-disk form is a JSON array of address strings. Loading accepts
/// any plain JSON array regardless of formatting; saving writes
/// pretty-printed JSON atomically (write to a temporary file in the
/// target directory, then rename).
#[derive(Debug, Clone)]
pub struct BlocklistStore {
    path: PathBuf,
}

impl BlocklistStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the blocklist from disk.
    ///
    /// An absent file is an empty list. A file that exists but cannot
    /// be read or parsed is an error, never silently reset.
    pub fn load(&self) -> Result<Blocklist> {
        if !self.path.exists() {
            return Ok(Blocklist::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            UfwbanError::Persistence(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let entries: Vec<BlockEntry> = serde_json::from_str(&content).map_err(|e| {
            UfwbanError::Persistence(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        Ok(Blocklist::from_entries(entries))
    }

    /// Write the blocklist to disk, replacing the file entirely.
    ///
    /// Uses tempfile + rename so readers never observe a partial
    /// document, even if this process crashes mid-write.
    pub fn save(&self, list: &Blocklist) -> Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| {
            UfwbanError::Persistence(format!("Failed to create {}: {}", parent.display(), e))
        })?;

        let content = serde_json::to_string_pretty(list.entries()).map_err(|e| {
            UfwbanError::Persistence(format!("Failed to serialize blocklist: {}", e))
        })?;

        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
            UfwbanError::Persistence(format!(
                "Failed to create temporary file in {}: {}",
                parent.display(),
                e
            ))
        })?;
        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| {
                UfwbanError::Persistence(format!(
                    "Failed to write {}: {}",
                    temp_file.path().display(),
                    e
                ))
            })?;

        temp_file.persist(&self.path).map_err(|e| {
            UfwbanError::Persistence(format!("Failed to persist {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
