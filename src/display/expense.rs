//! Expense history formatting
//!
//! Renders the ledger's expenses as a table, newest first.

use chrono::Local;
use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use super::currency::format_currency;
use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format an expense date in the user's local calendar
pub fn format_expense_date(expense: &Expense, settings: &Settings) -> String {
    expense
        .date
        .with_timezone(&Local)
        .format(&settings.date_format)
        .to_string()
}

/// Format a single expense as a one-line summary
pub fn format_expense_line(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{}  {}  {}  {}",
        expense.id,
        format_expense_date(expense, settings),
        expense.title,
        format_currency(expense.amount, settings)
    )
}

/// Format expenses (already in display order) as a table
pub fn format_expense_table(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded this month.".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.to_string(),
        date: format_expense_date(expense, settings),
        title: expense.title.clone(),
        amount: format_currency(expense.amount, settings),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn coffee() -> Expense {
        Expense::new(
            "Coffee",
            dec!(25000),
            Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_table() {
        let output = format_expense_table(&[], &Settings::default());
        assert_eq!(output, "No expenses recorded this month.");
    }

    #[test]
    fn test_table_contains_formatted_fields() {
        let expense = coffee();
        let output = format_expense_table(&[&expense], &Settings::default());

        assert!(output.contains("Title"));
        assert!(output.contains("Coffee"));
        assert!(output.contains("Rp25.000"));
        assert!(output.contains(&expense.id.to_string()));
    }

    #[test]
    fn test_table_keeps_given_order() {
        let first = coffee();
        let second = Expense::new("Lunch", dec!(40000), first.date).unwrap();
        let output = format_expense_table(&[&second, &first], &Settings::default());

        let lunch = output.find("Lunch").unwrap();
        let coffee = output.find("Coffee").unwrap();
        assert!(lunch < coffee);
    }

    #[test]
    fn test_expense_line() {
        let expense = coffee();
        let settings = Settings {
            date_format: "%Y".into(),
            ..Settings::default()
        };
        let line = format_expense_line(&expense, &settings);

        assert!(line.starts_with(&expense.id.to_string()));
        assert!(line.contains("2025"));
        assert!(line.ends_with("Coffee  Rp25.000"));
    }
}
