//! Key-value stores that hold the ledger's records
//!
//! Each key maps to one whole JSON blob. There is no partial update: a write
//! replaces the blob, a remove erases it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::BuduError;

use super::file_io::{read_optional, remove_if_exists, write_atomic};

/// Abstraction over local persistence for ledger records
pub trait KeyValueStore {
    /// Read the blob stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, BuduError>;

    /// Replace the blob stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), BuduError>;

    /// Erase `key`; erasing a missing key succeeds
    fn remove(&self, key: &str) -> Result<(), BuduError>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the record files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, BuduError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BuduError::Storage(format!("Invalid record key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BuduError> {
        read_optional(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BuduError> {
        write_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> Result<(), BuduError> {
        remove_if_exists(self.path_for(key)?)
    }
}

/// Volatile store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize, BuduError> {
        let records = self
            .records
            .read()
            .map_err(|e| BuduError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, BuduError> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BuduError> {
        let records = self
            .records
            .read()
            .map_err(|e| BuduError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BuduError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| BuduError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BuduError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| BuduError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        records.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, BuduError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BuduError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), BuduError> {
        (**self).remove(key)
    }
}
