//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod budget;
pub mod expense;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};

use crate::config::{BuduPaths, Settings};
use crate::display::format_summary;
use crate::ledger::BudgetLedger;

/// Wipe the budget and all expenses; refuses unless confirmed
pub fn handle_reset_command(ledger: &mut BudgetLedger, confirmed: bool) {
    if !confirmed {
        println!("This deletes the budget and every expense for this month.");
        println!("Run 'budu reset --yes' to confirm.");
        return;
    }

    ledger.reset_all();
    println!("All budget data has been reset.");
}

/// Print the month overview
pub fn handle_status_command(ledger: &BudgetLedger, settings: &Settings) {
    print!("{}", format_summary(ledger, settings));
}

/// Print where data lives and the active settings
pub fn handle_config_command(paths: &BuduPaths, settings: &Settings) {
    println!("Budu Configuration");
    println!("==================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Thousands separator: {:?}", settings.thousands_separator);
    println!("  Decimal separator:   {:?}", settings.decimal_separator);
    println!("  Fraction digits:     {}", settings.fraction_digits);
    println!("  Date format:         {}", settings.date_format);
    println!("  Rollover policy:     {:?}", settings.rollover_policy);
}
