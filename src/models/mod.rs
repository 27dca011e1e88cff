//! Core data models for Budu
//!
//! The month's budget and the expenses recorded against it.

pub mod budget;
pub mod expense;
pub mod ids;

pub use budget::MonthlyBudget;
pub use expense::Expense;
pub use ids::ExpenseId;
