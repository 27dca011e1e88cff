//! User settings for Budu
//!
//! Currency display preferences and the month-rollover policy.

use serde::{Deserialize, Serialize};

use super::paths::BuduPaths;
use crate::error::BuduError;

/// When the ledger checks whether its budget belongs to a past month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RolloverPolicy {
    /// Only when the ledger is opened
    #[default]
    OnStartup,
    /// When the ledger is opened and again before every mutation
    BeforeEachMutation,
}

/// User settings for Budu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Digit grouping separator ("." gives 1.500.000)
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Separator between whole units and fractional digits
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Fractional digits shown when formatting amounts
    #[serde(default)]
    pub fraction_digits: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub rollover_policy: RolloverPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rp".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            fraction_digits: 0,
            date_format: default_date_format(),
            rollover_policy: RolloverPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BuduPaths) -> Result<Self, BuduError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BuduError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BuduError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BuduPaths) -> Result<(), BuduError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BuduError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BuduError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
