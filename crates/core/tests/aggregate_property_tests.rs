//! Property-based tests for the aggregate computations.
//!
//! These verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use finapp_core::auth::SessionTrait;
use finapp_core::goals::Goal;
use finapp_core::portfolio::{summarize, Position};
use finapp_core::store::MemoryStore;
use finapp_core::transactions::{
    balance_of, total_of_kind, Category, NewTransaction, Transaction, TransactionKind,
    TransactionService, TransactionServiceTrait,
};

struct FixedSession;

impl SessionTrait for FixedSession {
    fn current_user(&self) -> Option<String> {
        Some("prop".to_string())
    }
}

// =============================================================================
// Generators
// =============================================================================

fn arb_kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Income),
        Just(TransactionKind::Expense),
    ]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Salary),
        Just(Category::Freelance),
        Just(Category::Investment),
        Just(Category::Food),
        Just(Category::Transport),
        Just(Category::Housing),
        Just(Category::Entertainment),
        Just(Category::Health),
        Just(Category::Education),
        Just(Category::Other),
    ]
}

/// Positive amounts with two decimal places, as cents.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_transactions(max: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(
        (arb_kind(), arb_category(), arb_amount(), "[a-z]{1,12}"),
        0..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (kind, category, amount, description))| Transaction {
                id: i as i64 + 1,
                kind,
                description,
                amount,
                category,
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                created_at: Utc::now(),
            })
            .collect()
    })
}

fn arb_new_transaction() -> impl Strategy<Value = NewTransaction> {
    (arb_kind(), arb_category(), arb_amount(), "[a-z]{1,12}").prop_map(
        |(kind, category, amount, description)| NewTransaction {
            kind,
            description,
            amount,
            category,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        },
    )
}

fn arb_position() -> impl Strategy<Value = Position> {
    ("[A-Z]{4}[0-9]", 1u32..1000, arb_amount(), arb_amount()).prop_map(
        |(symbol, quantity, average_price, current_price)| Position {
            name: symbol.clone(),
            symbol,
            quantity,
            average_price,
            current_price,
        },
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance is always exactly total income minus total expense,
    /// with the two sides summed independently.
    #[test]
    fn prop_balance_is_income_minus_expense(transactions in arb_transactions(50)) {
        let income = total_of_kind(&transactions, TransactionKind::Income);
        let expense = total_of_kind(&transactions, TransactionKind::Expense);
        prop_assert_eq!(balance_of(&transactions), income - expense);
    }

    /// Goal progress stays in [0, 100] no matter how far `current` runs past
    /// the target, while completion uses the unclamped comparison.
    #[test]
    fn prop_goal_progress_is_clamped(
        current_cents in 0i64..100_000_000,
        target_cents in 1i64..100_000_000,
    ) {
        let goal = Goal {
            id: 1,
            title: "g".to_string(),
            description: None,
            target: Decimal::new(target_cents, 2),
            current: Decimal::new(current_cents, 2),
            image: None,
            created_at: Utc::now(),
        };

        let progress = goal.progress_percent();
        prop_assert!(progress >= Decimal::ZERO);
        prop_assert!(progress <= Decimal::from(100));
        prop_assert_eq!(goal.is_completed(), goal.current >= goal.target);
        if goal.is_completed() {
            prop_assert_eq!(progress, Decimal::from(100));
        }
    }

    /// Adding a record and removing it by id restores the collection to its
    /// prior content and order.
    #[test]
    fn prop_add_then_remove_round_trips(
        existing in proptest::collection::vec(arb_new_transaction(), 0..10),
        extra in arb_new_transaction(),
    ) {
        let service = TransactionService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedSession),
            "finapp",
        );
        for new_transaction in existing {
            service.add_transaction(new_transaction).unwrap();
        }

        let before = service.get_transactions().unwrap();
        let added = service.add_transaction(extra).unwrap();
        service.delete_transaction(added.id).unwrap();

        prop_assert_eq!(service.get_transactions().unwrap(), before);
    }

    /// The portfolio summary totals are the per-position sums, and the
    /// profit is their difference.
    #[test]
    fn prop_summary_totals_are_consistent(positions in proptest::collection::vec(arb_position(), 0..20)) {
        let summary = summarize(&positions);

        let invested: Decimal = positions.iter().map(Position::total_invested).sum();
        let value: Decimal = positions.iter().map(Position::current_value).sum();
        prop_assert_eq!(summary.total_invested, invested);
        prop_assert_eq!(summary.current_value, value);
        prop_assert_eq!(summary.total_profit, value - invested);

        let profit_sum: Decimal = positions.iter().map(Position::profit).sum();
        prop_assert_eq!(summary.total_profit, profit_sum);
    }
}
