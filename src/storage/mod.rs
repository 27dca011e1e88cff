//! Storage layer for Budu
//!
//! Two independent records, each a whole JSON blob under a fixed key, kept in
//! a [`KeyValueStore`]. Reads degrade silently: a record that is missing or
//! cannot be decoded is treated as absent.

pub mod file_io;
pub mod kv;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};

use serde::{de::DeserializeOwned, Serialize};

use crate::config::paths::BuduPaths;
use crate::error::BuduError;

/// Key of the current [`MonthlyBudget`](crate::models::MonthlyBudget)
pub const BUDGET_KEY: &str = "monthly_budget";

/// Key of the ordered expense list
pub const EXPENSES_KEY: &str = "expenses";

/// Open the file-backed store under the configured data directory
pub fn open_file_store(paths: &BuduPaths) -> Result<JsonFileStore, BuduError> {
    paths.ensure_directories()?;
    Ok(JsonFileStore::new(paths.data_dir()))
}

/// Load and decode a record, treating absence and corruption alike as `None`
pub fn load_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read record, starting empty");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed record");
            None
        }
    }
}

/// Encode and write a record as a whole blob
pub fn save_record<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), BuduError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BuduError::Json(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &json)
}
