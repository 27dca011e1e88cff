//! Monthly budget model
//!
//! The spending ceiling for one calendar month. There is at most one active
//! budget; it is stamped with the month it was set in and becomes stale once
//! the calendar moves on.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BuduError, BuduResult};

/// Budget for a single calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Spending ceiling for the month (always positive)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// Calendar month, 1-12
    pub month: u32,

    pub year: i32,
}

impl MonthlyBudget {
    /// Create a validated budget stamped with the month containing `today`
    pub fn for_month_of(amount: Decimal, today: NaiveDate) -> BuduResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(BuduError::InvalidAmount(amount));
        }

        Ok(Self {
            amount,
            month: today.month(),
            year: today.year(),
        })
    }

    /// Whether this budget belongs to the calendar month containing `today`
    pub fn is_current_month(&self, today: NaiveDate) -> bool {
        self.month == today.month() && self.year == today.year()
    }

    /// First day of the budget's month, if the stamp is a real date
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthlyBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}: {}", self.year, self.month, self.amount)
    }
}
