//! The budget ledger and its change notifications

pub mod budget_ledger;
pub mod events;

pub use budget_ledger::BudgetLedger;
pub use events::{LedgerEvent, SubscriptionId};
