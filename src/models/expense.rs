//! Expense model
//!
//! A single spending entry recorded against the month's budget. Expenses are
//! immutable once created; the only way to change one is to delete it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use crate::error::{BuduError, BuduResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display label
    pub title: String,

    /// Amount spent (always positive)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// When the expense was recorded
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a validated expense with a fresh id
    ///
    /// The title is trimmed; a blank title or non-positive amount is rejected.
    pub fn new(title: &str, amount: Decimal, date: DateTime<Utc>) -> BuduResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BuduError::EmptyTitle);
        }
        if amount <= Decimal::ZERO {
            return Err(BuduError::InvalidAmount(amount));
        }

        Ok(Self {
            id: ExpenseId::new(),
            title: title.to_string(),
            amount,
            date,
        })
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.amount)
    }
}
