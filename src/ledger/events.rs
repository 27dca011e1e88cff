//! Change notifications for ledger consumers
//!
//! Screens that render ledger state subscribe once and re-render when an
//! event arrives, instead of polling shared state.

use std::fmt;

use crate::models::{Expense, ExpenseId, MonthlyBudget};

/// A change that has been applied to the ledger
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    /// A budget was set, replacing any previous one
    BudgetSet(MonthlyBudget),
    ExpenseAdded(Expense),
    ExpenseDeleted(ExpenseId),
    /// Everything was wiped on request
    Reset,
    /// The stored budget belonged to a past month and everything was cleared
    RolledOver,
}

/// Handle returned by [`BudgetLedger::subscribe`](super::BudgetLedger::subscribe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&LedgerEvent)>;

/// Registered callbacks, notified in subscription order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &LedgerEvent) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let first = seen.clone();
        subscribers.add(Box::new(move |_: &LedgerEvent| first.borrow_mut().push("first")));
        let second = seen.clone();
        subscribers.add(Box::new(move |_: &LedgerEvent| second.borrow_mut().push("second")));

        subscribers.notify(&LedgerEvent::Reset);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_remove() {
        let mut subscribers = Subscribers::default();
        let id = subscribers.add(Box::new(|_: &LedgerEvent| {}));

        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));
        assert_eq!(subscribers.len(), 0);
    }
}
