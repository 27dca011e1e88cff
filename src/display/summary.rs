//! Budget summary formatting

use rust_decimal::Decimal;

use super::currency::format_currency;
use crate::config::Settings;
use crate::ledger::BudgetLedger;

/// Format the month overview: budget, spending and what is left
pub fn format_summary(ledger: &BudgetLedger, settings: &Settings) -> String {
    let mut output = String::new();

    let Some(budget) = ledger.current_budget() else {
        output.push_str("No budget set for this month.\n");
        output.push_str("Run 'budu budget set <AMOUNT>' to start tracking.\n");
        if !ledger.expenses().is_empty() {
            output.push_str(&format!(
                "\nSpent so far: {} across {} expense(s)\n",
                format_currency(ledger.total_expenses(), settings),
                ledger.expenses().len()
            ));
        }
        return output;
    };

    let month = budget
        .first_day()
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", budget.year, budget.month));

    output.push_str(&format!("Budget for {}\n", month));
    output.push_str(&format!("{}\n", "=".repeat(32)));
    output.push_str(&format!(
        "Budget:     {:>20}\n",
        format_currency(budget.amount, settings)
    ));

    let spent = format_currency(ledger.total_expenses(), settings);
    let percent = ledger
        .spent_ratio()
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    let spent = match percent {
        Some(percent) => format!("{} ({}%)", spent, percent.round()),
        None => spent,
    };
    output.push_str(&format!("Spent:      {:>20}\n", spent));
    output.push_str(&format!(
        "Available:  {:>20}\n",
        format_currency(ledger.available_balance(), settings)
    ));
    output.push_str(&format!("Expenses:   {:>20}\n", ledger.expenses().len()));

    if ledger.is_over_budget() {
        output.push_str("\n⚠ Over budget\n");
    }

    output
}
