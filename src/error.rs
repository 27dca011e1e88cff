//! Custom error types for Budu
//!
//! This module defines the error hierarchy for the tracker using thiserror
//! for ergonomic error definitions.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for Budu operations
#[derive(Error, Debug)]
pub enum BuduError {
    /// An amount that is zero or negative was passed to a mutator
    #[error("Invalid amount: {0} (amounts must be greater than zero)")]
    InvalidAmount(Decimal),

    /// An expense that would push the month's total past what can be represented
    #[error("Amount too large: {0} (the month's total would overflow)")]
    AmountTooLarge(Decimal),

    /// An expense title that is empty or only whitespace
    #[error("Expense title cannot be empty")]
    EmptyTitle,

    /// Text that could not be read as a number
    #[error("Invalid number: '{0}'")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short identifier matched more than one entity
    #[error("Ambiguous identifier: {0}")]
    Ambiguous(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BuduError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by rejected user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::AmountTooLarge(_) | Self::EmptyTitle | Self::Parse(_)
        )
    }
}

impl From<std::io::Error> for BuduError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BuduError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Budu operations
pub type BuduResult<T> = Result<T, BuduError>;
