//! Property-based tests for ledger totals and persistence.

use std::rc::Rc;

use proptest::prelude::*;
use proptest::sample::Index;
use rust_decimal::Decimal;

use super::BudgetLedger;
use crate::clock::FixedClock;
use crate::config::settings::RolloverPolicy;
use crate::error::BuduError;
use crate::storage::MemoryStore;

/// Largest mantissa a `Decimal` can hold (96 bits)
const MAX_MANTISSA: i128 = (1 << 96) - 1;

/// Strategy for positive amounts, from everyday prices up to `Decimal::MAX`
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        3 => (1i64..100_000_000_000i64, 0u32..=2).prop_map(|(n, scale)| Decimal::new(n, scale)),
        1 => (1i128..=MAX_MANTISSA, 0u32..=28)
            .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale)),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add(Decimal),
    Delete(Index),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => amount_strategy().prop_map(Op::Add),
        1 => any::<Index>().prop_map(Op::Delete),
    ]
}

fn open(store: &Rc<MemoryStore>) -> BudgetLedger {
    BudgetLedger::open(
        store.clone(),
        FixedClock::on(2025, 7, 15).unwrap(),
        RolloverPolicy::OnStartup,
    )
}

fn sum(amounts: &[Decimal]) -> Decimal {
    amounts
        .iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total and balance always match the expenses that were kept, whatever
    /// mix of adds, overflowing adds and deletes led there.
    #[test]
    fn prop_totals_follow_adds_and_deletes(
        budget in amount_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..24),
    ) {
        let store = Rc::new(MemoryStore::new());
        let mut ledger = open(&store);
        ledger.set_budget(budget).unwrap();
        let mut kept: Vec<Decimal> = Vec::new();

        for op in ops {
            match op {
                Op::Add(amount) => {
                    let fits = sum(&kept).checked_add(amount).is_some();
                    match ledger.add_expense("item", amount) {
                        Ok(_) => {
                            prop_assert!(fits);
                            kept.push(amount);
                        }
                        Err(BuduError::AmountTooLarge(_)) => prop_assert!(!fits),
                        Err(e) => prop_assert!(false, "unexpected error: {}", e),
                    }
                }
                Op::Delete(index) => {
                    if kept.is_empty() {
                        continue;
                    }
                    let i = index.index(kept.len());
                    let id = ledger.expenses()[i].id;
                    prop_assert!(ledger.delete(id));
                    kept.remove(i);
                }
            }

            let total = sum(&kept);
            prop_assert_eq!(ledger.expenses().len(), kept.len());
            prop_assert_eq!(ledger.total_expenses(), total);
            prop_assert_eq!(ledger.available_balance(), budget - total);
        }
    }

    /// Reopening the same store yields exactly the state that was saved.
    #[test]
    fn prop_reload_restores_exact_state(
        budget in amount_strategy(),
        amounts in prop::collection::vec(amount_strategy(), 0..12),
    ) {
        let store = Rc::new(MemoryStore::new());
        let mut ledger = open(&store);
        ledger.set_budget(budget).unwrap();
        for amount in amounts {
            // Overflowing adds are rejected and leave nothing behind
            let _ = ledger.add_expense("item", amount);
        }

        let reloaded = open(&store);
        prop_assert_eq!(reloaded.current_budget(), ledger.current_budget());
        prop_assert_eq!(reloaded.expenses(), ledger.expenses());
        prop_assert_eq!(reloaded.total_expenses(), ledger.total_expenses());
        prop_assert_eq!(reloaded.available_balance(), ledger.available_balance());
    }
}
