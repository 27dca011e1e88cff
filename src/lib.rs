//! Budu - personal monthly budget tracker
//!
//! Set a budget for the month, record expenses against it, and see what is
//! left. When a new calendar month starts the previous month's data is
//! cleared; there is no history across months.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses and the monthly budget
//! - `clock`: Source of the current time
//! - `storage`: Key-value persistence of ledger records
//! - `ledger`: The budget ledger and its change notifications
//! - `display`: Currency formatting and terminal output
//! - `cli`: Command handlers for the `budu` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budu::ledger::BudgetLedger;
//! use budu::storage::MemoryStore;
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = BudgetLedger::open_with_system_clock(MemoryStore::new());
//! ledger.set_budget(dec!(500000))?;
//! ledger.add_expense("Coffee", dec!(25000))?;
//! assert_eq!(ledger.available_balance(), dec!(475000));
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{BuduError, BuduResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber, writing to stderr.
///
/// Defaults to warnings from this crate; `RUST_LOG` overrides.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budu=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
