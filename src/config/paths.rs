//! Path management for Budu
//!
//! Resolves where settings and ledger records live.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDU_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `budu` (e.g. `~/.config/budu` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BuduError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDU_DATA_DIR";

/// Manages all paths used by Budu
#[derive(Debug, Clone)]
pub struct BuduPaths {
    /// Base directory for all Budu data
    base_dir: PathBuf,
}

impl BuduPaths {
    /// Create a new BuduPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform home directory
    /// cannot be determined.
    pub fn new() -> Result<Self, BuduError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BuduPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per ledger record
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BuduError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BuduError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BuduError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BuduError> {
    ProjectDirs::from("", "", "budu")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BuduError::Config("Could not determine home directory".into()))
}
