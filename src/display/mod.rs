//! Display formatting for terminal output
//!
//! Currency and date formatting, the expense history table and the month
//! summary. Nothing here touches ledger state.

pub mod currency;
pub mod expense;
pub mod summary;

pub use currency::{format_currency, parse_amount};
pub use expense::{format_expense_date, format_expense_line, format_expense_table};
pub use summary::format_summary;
