use anyhow::Result;
use clap::{Parser, Subcommand};

use budu::cli::{
    handle_budget_command, handle_config_command, handle_expense_command, handle_reset_command,
    handle_status_command,
};
use budu::clock::SystemClock;
use budu::config::{paths::BuduPaths, settings::Settings};
use budu::ledger::BudgetLedger;
use budu::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "budu",
    version,
    about = "Personal monthly budget tracker",
    long_about = "Budu tracks one monthly budget and the expenses recorded against it. \
                  Data is kept locally and cleared automatically when a new month starts."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this month's budget, spending and balance
    Status,

    /// Budget management commands
    #[command(subcommand)]
    Budget(budu::cli::BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(budu::cli::ExpenseCommands),

    /// Delete the budget and all expenses
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show data location and settings
    Config,
}

fn main() -> Result<()> {
    budu::init_tracing();
    let cli = Cli::parse();

    let paths = BuduPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Some(Commands::Config) = cli.command {
        handle_config_command(&paths, &settings);
        return Ok(());
    }

    let store = open_file_store(&paths)?;
    let mut ledger = BudgetLedger::open(store, SystemClock, settings.rollover_policy);
    if ledger.rolled_over_on_open() {
        println!("A new month has started: last month's budget and expenses were cleared.");
        println!();
    }

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Reset { yes }) => handle_reset_command(&mut ledger, yes),
        Some(Commands::Status) | None => handle_status_command(&ledger, &settings),
        Some(Commands::Config) => handle_config_command(&paths, &settings),
    }

    if ledger.has_unsaved_changes() {
        if let Err(e) = ledger.flush() {
            eprintln!("Warning: changes could not be saved: {}", e);
        }
    }

    Ok(())
}
