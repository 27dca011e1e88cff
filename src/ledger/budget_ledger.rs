//! The month's budget, its expenses, and everything derived from them
//!
//! `BudgetLedger` is the single owner of ledger state. It restores itself
//! from a [`KeyValueStore`] when opened, writes every change back as a whole
//! record, and clears itself when the stored budget belongs to a past month.

use rust_decimal::Decimal;

use super::events::{LedgerEvent, SubscriptionId, Subscribers};
use crate::clock::{Clock, SystemClock};
use crate::config::settings::RolloverPolicy;
use crate::error::{BuduError, BuduResult};
use crate::models::ids::EXPENSE_ID_PREFIX;
use crate::models::{Expense, ExpenseId, MonthlyBudget};
use crate::storage::{load_record, save_record, KeyValueStore, BUDGET_KEY, EXPENSES_KEY};

/// Records whose last write attempt failed
#[derive(Debug, Default, Clone, Copy)]
struct Unsaved {
    budget: bool,
    expenses: bool,
}

/// In-memory ledger for the current month
pub struct BudgetLedger {
    current_budget: Option<MonthlyBudget>,
    expenses: Vec<Expense>,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    policy: RolloverPolicy,
    subscribers: Subscribers,
    unsaved: Unsaved,
    rolled_over_on_open: bool,
}

impl BudgetLedger {
    /// Restore the ledger from `store`, then apply the month-rollover check
    ///
    /// Missing or malformed records yield an empty ledger; nothing is surfaced.
    pub fn open<S, C>(store: S, clock: C, policy: RolloverPolicy) -> Self
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
    {
        let current_budget: Option<MonthlyBudget> = load_record(&store, BUDGET_KEY);
        let expenses: Vec<Expense> = load_record(&store, EXPENSES_KEY).unwrap_or_default();

        tracing::debug!(
            has_budget = current_budget.is_some(),
            expenses = expenses.len(),
            "ledger loaded"
        );

        let mut ledger = Self {
            current_budget,
            expenses,
            store: Box::new(store),
            clock: Box::new(clock),
            policy,
            subscribers: Subscribers::default(),
            unsaved: Unsaved::default(),
            rolled_over_on_open: false,
        };
        ledger.rolled_over_on_open = ledger.check_and_reset_for_new_month();
        ledger
    }

    /// Open with the system clock and the default rollover policy
    pub fn open_with_system_clock<S: KeyValueStore + 'static>(store: S) -> Self {
        Self::open(store, SystemClock, RolloverPolicy::default())
    }

    // ---- read side ----

    pub fn current_budget(&self) -> Option<&MonthlyBudget> {
        self.current_budget.as_ref()
    }

    /// Expenses in the order they were added
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses sorted by date, newest first, for history views
    pub fn expenses_newest_first(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Sum of all expense amounts; zero when there are none
    ///
    /// `add_expense` keeps the total representable. Records edited by hand
    /// can still exceed it, in which case the sum saturates.
    pub fn total_expenses(&self) -> Decimal {
        self.expenses
            .iter()
            .fold(Decimal::ZERO, |total, e| total.saturating_add(e.amount))
    }

    /// Budget minus spending, or zero without a budget. Negative when overspent.
    pub fn available_balance(&self) -> Decimal {
        match &self.current_budget {
            Some(budget) => budget.amount.saturating_sub(self.total_expenses()),
            None => Decimal::ZERO,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.current_budget.is_some() && self.available_balance() < Decimal::ZERO
    }

    /// Fraction of the budget already spent (1 means fully spent)
    pub fn spent_ratio(&self) -> Option<Decimal> {
        let budget = self.current_budget.as_ref()?;
        self.total_expenses().checked_div(budget.amount)
    }

    /// Resolve an expense by full id or by a unique id prefix (`exp-1a2b` or `1a2b`)
    pub fn find_expense(&self, query: &str) -> BuduResult<&Expense> {
        let needle = query.trim().to_ascii_lowercase();
        let needle = needle.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(&needle);
        if needle.is_empty() {
            return Err(BuduError::expense_not_found(query));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.to_full_string().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(BuduError::Ambiguous(format!(
                "'{}' matches more than one expense",
                query
            ))),
            (None, _) => Err(BuduError::expense_not_found(query)),
        }
    }

    /// True when the budget found on open was stale and the ledger was cleared
    pub fn rolled_over_on_open(&self) -> bool {
        self.rolled_over_on_open
    }

    pub fn policy(&self) -> RolloverPolicy {
        self.policy
    }

    // ---- mutations ----

    /// Set the budget for the current month, replacing any existing one
    pub fn set_budget(&mut self, amount: Decimal) -> BuduResult<()> {
        let budget = MonthlyBudget::for_month_of(amount, self.clock.today())?;
        self.roll_over_if_due();

        tracing::debug!(%amount, month = budget.month, year = budget.year, "budget set");
        self.current_budget = Some(budget.clone());
        self.sync(true, false);
        self.subscribers.notify(&LedgerEvent::BudgetSet(budget));
        Ok(())
    }

    /// Record an expense dated now and return its id
    ///
    /// Rejected with `AmountTooLarge` when the month's total would overflow.
    pub fn add_expense(&mut self, title: &str, amount: Decimal) -> BuduResult<ExpenseId> {
        let expense = Expense::new(title, amount, self.clock.now())?;
        self.roll_over_if_due();
        if self.total_expenses().checked_add(amount).is_none() {
            return Err(BuduError::AmountTooLarge(amount));
        }

        let id = expense.id;
        tracing::debug!(%id, %amount, "expense added");
        self.expenses.push(expense.clone());
        self.sync(false, true);
        self.subscribers.notify(&LedgerEvent::ExpenseAdded(expense));
        Ok(id)
    }

    /// Remove an expense; returns `false` (and changes nothing) if the id is unknown
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        self.roll_over_if_due();

        let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
            return false;
        };

        self.expenses.remove(index);
        tracing::debug!(%id, "expense deleted");
        self.sync(false, true);
        self.subscribers.notify(&LedgerEvent::ExpenseDeleted(id));
        true
    }

    /// Clear the budget and all expenses, in memory and in storage
    pub fn reset_all(&mut self) {
        self.clear();
        tracing::debug!("ledger reset");
        self.subscribers.notify(&LedgerEvent::Reset);
    }

    /// Clear everything if the budget is stamped with a month other than the current one
    ///
    /// Returns whether a reset happened.
    pub fn check_and_reset_for_new_month(&mut self) -> bool {
        let today = self.clock.today();
        let stale = match &self.current_budget {
            Some(budget) => !budget.is_current_month(today),
            None => false,
        };
        if !stale {
            return false;
        }

        tracing::info!(%today, "budget belongs to a previous month, starting fresh");
        self.clear();
        self.subscribers.notify(&LedgerEvent::RolledOver);
        true
    }

    // ---- observers ----

    /// Register a callback invoked after every applied change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LedgerEvent) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    // ---- persistence ----

    /// Whether some record could not be written and storage lags behind memory
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved.budget || self.unsaved.expenses
    }

    /// Retry writing every record whose last write failed
    pub fn flush(&mut self) -> BuduResult<()> {
        let mut last_error = None;

        if self.unsaved.budget {
            match self.write_budget() {
                Ok(()) => self.unsaved.budget = false,
                Err(e) => last_error = Some(e),
            }
        }
        if self.unsaved.expenses {
            match self.write_expenses() {
                Ok(()) => self.unsaved.expenses = false,
                Err(e) => last_error = Some(e),
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn roll_over_if_due(&mut self) {
        if self.policy == RolloverPolicy::BeforeEachMutation {
            self.check_and_reset_for_new_month();
        }
    }

    fn clear(&mut self) {
        self.current_budget = None;
        self.expenses.clear();
        self.sync(true, true);
    }

    /// Write the changed records plus any that are still unsaved.
    /// Failures are logged and remembered, never returned.
    fn sync(&mut self, budget_changed: bool, expenses_changed: bool) {
        if budget_changed || self.unsaved.budget {
            self.unsaved.budget = match self.write_budget() {
                Ok(()) => false,
                Err(e) => {
                    tracing::warn!(key = BUDGET_KEY, error = %e, "failed to persist budget");
                    true
                }
            };
        }
        if expenses_changed || self.unsaved.expenses {
            self.unsaved.expenses = match self.write_expenses() {
                Ok(()) => false,
                Err(e) => {
                    tracing::warn!(key = EXPENSES_KEY, error = %e, "failed to persist expenses");
                    true
                }
            };
        }
    }

    fn write_budget(&self) -> BuduResult<()> {
        match &self.current_budget {
            Some(budget) => save_record(&*self.store, BUDGET_KEY, budget),
            None => self.store.remove(BUDGET_KEY),
        }
    }

    // An empty ledger leaves no expenses record behind
    fn write_expenses(&self) -> BuduResult<()> {
        if self.expenses.is_empty() {
            self.store.remove(EXPENSES_KEY)
        } else {
            save_record(&*self.store, EXPENSES_KEY, &self.expenses)
        }
    }
}

impl std::fmt::Debug for BudgetLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetLedger")
            .field("current_budget", &self.current_budget)
            .field("expenses", &self.expenses)
            .field("policy", &self.policy)
            .field("subscribers", &self.subscribers)
            .field("unsaved", &self.unsaved)
            .finish()
    }
}


#[cfg(test)]
#[path = "budget_ledger_props.rs"]
mod props;
