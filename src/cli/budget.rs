//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_currency, format_summary, parse_amount};
use crate::error::BuduResult;
use crate::ledger::BudgetLedger;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set this month's budget, replacing any existing one
    Set {
        /// Amount (e.g. "500000", "500.000" or "Rp500.000")
        amount: String,
    },

    /// Show this month's budget and balance
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut BudgetLedger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BuduResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount, settings)?;
            ledger.set_budget(amount)?;
            println!(
                "Budget set to {}. Available: {}",
                format_currency(amount, settings),
                format_currency(ledger.available_balance(), settings)
            );
        }
        BudgetCommands::Show => {
            print!("{}", format_summary(ledger, settings));
        }
    }

    Ok(())
}
