//! Key-value storage providers.
//!
//! Persistence goes through the [`StorageProvider`] trait so the history log
//! and preferences never touch a backend directly. The file provider is the
//! durable one; the in-memory provider backs tests.

use crate::error::{CentumError, CentumResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Storage key holding the serialized history snapshot.
pub const HISTORY_KEY: &str = "recentCalculations";

/// Storage key holding the last-selected display language code.
pub const LANGUAGE_KEY: &str = "preferredLanguage";

/// Synchronous key-value persistence.
///
/// Reads and writes are small and block the caller briefly; failures are
/// infrastructure errors, never user input problems.
pub trait StorageProvider: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> CentumResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> CentumResult<()>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> CentumResult<()>;
}

/// In-memory provider used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorageProvider {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn get(&self, key: &str) -> CentumResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CentumError::internal("storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CentumResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CentumError::internal("storage lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CentumResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CentumError::internal("storage lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed provider: one file per key beneath a data directory.
#[derive(Debug, Clone)]
pub struct FileStorageProvider {
    root: PathBuf,
}

impl FileStorageProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageProvider for FileStorageProvider {
    fn get(&self, key: &str) -> CentumResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CentumError::storage_with_key(key, "read", err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> CentumResult<()> {
        fs::create_dir_all(&self.root)
            .map_err(|err| CentumError::storage("create_dir", err.to_string()))?;
        fs::write(self.path_for(key), value)
            .map_err(|err| CentumError::storage_with_key(key, "write", err.to_string()))
    }

    fn remove(&self, key: &str) -> CentumResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CentumError::storage_with_key(key, "remove", err.to_string())),
        }
    }
}
