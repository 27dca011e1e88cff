//! Expense CLI commands
//!
//! Add, list and delete the month's expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_currency, format_expense_line, format_expense_table, parse_amount};
use crate::error::BuduResult;
use crate::ledger::BudgetLedger;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense dated now
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g. "25000" or "25.000")
        amount: String,
    },

    /// List this month's expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full, or a unique prefix such as "exp-1a2b")
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut BudgetLedger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BuduResult<()> {
    match cmd {
        ExpenseCommands::Add { title, amount } => {
            let amount = parse_amount(&amount, settings)?;
            let id = ledger.add_expense(&title, amount)?;
            println!("Added expense {}", id);

            if ledger.current_budget().is_some() {
                println!(
                    "Available: {}",
                    format_currency(ledger.available_balance(), settings)
                );
                if ledger.is_over_budget() {
                    println!("⚠ You are over this month's budget");
                }
            }
        }
        ExpenseCommands::List { limit } => {
            let mut expenses = ledger.expenses_newest_first();
            let total = expenses.len();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            println!("{}", format_expense_table(&expenses, settings));
            if expenses.len() < total {
                println!("Showing {} of {} expenses", expenses.len(), total);
            }
            if total > 0 {
                println!(
                    "Total: {}",
                    format_currency(ledger.total_expenses(), settings)
                );
            }
        }
        ExpenseCommands::Delete { id } => {
            let expense = ledger.find_expense(&id)?.clone();
            ledger.delete(expense.id);
            println!("Deleted {}", format_expense_line(&expense, settings));
        }
    }

    Ok(())
}
