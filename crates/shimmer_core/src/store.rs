//! Durable key-value storage
//!
//! The persistence primitive behind the theme flag (and any future
//! per-origin state): a string-to-string map that survives reloads.
//! [`KvStore`] is the seam; [`MemoryStore`] backs tests and ephemeral
//! hosts, [`FileStore`] persists to a TOML file on disk.
//!
//! Failures are surfaced as [`StoreError`] and left to the caller;
//! persistence is load-bearing for the theme flag, so there is no
//! silent-fallback path here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing a store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Store file exists but is not valid TOML
    #[error("store file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Store contents could not be serialized
    #[error("store serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Durable string-to-string storage scoped to the hosting page/origin
///
/// Semantics follow the web storage primitive the engines were designed
/// against: absent keys read as `None`, writes overwrite, and entries
/// persist until removed.
pub trait KvStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the entry under `key`; removing an absent key is a no-op
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and hosts without durable storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// On-disk layout of a [`FileStore`]
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// File-backed store persisting entries as a TOML table
///
/// The whole table is rewritten on every mutation. Entry counts here are
/// tiny (the theme flag, little else), so simplicity wins over journaling.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let document: StoreFile = toml::from_str(&fs::read_to_string(&path)?)?;
            document.entries
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened key-value store");
        Ok(Self { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let document = StoreFile {
            entries: self.entries.clone(),
        };
        fs::write(&self.path, toml::to_string(&document)?)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
