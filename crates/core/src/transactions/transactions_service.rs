use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::auth::SessionTrait;
use crate::constants::TRANSACTIONS_COLLECTION;
use crate::errors::Result;
use crate::store::{CollectionStore, KvStore};
use crate::utils::next_record_id;

use super::transactions_model::{
    Category, NewTransaction, Transaction, TransactionFilter, TransactionKind,
};
use super::transactions_traits::TransactionServiceTrait;

/// Sums the amounts of all transactions of `kind`.
pub fn total_of_kind(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expense over a snapshot.
pub fn balance_of(transactions: &[Transaction]) -> Decimal {
    total_of_kind(transactions, TransactionKind::Income)
        - total_of_kind(transactions, TransactionKind::Expense)
}

pub struct TransactionService {
    collection: CollectionStore<Transaction>,
}

impl TransactionService {
    pub fn new(
        store: Arc<dyn KvStore>,
        session: Arc<dyn SessionTrait>,
        namespace: &str,
    ) -> Self {
        TransactionService {
            collection: CollectionStore::new(store, session, namespace, TRANSACTIONS_COLLECTION),
        }
    }

    /// Seeds example transactions for a user with no stored collection.
    ///
    /// No-op when anything is already persisted. Wired by the context only
    /// when `AppConfig::seed_sample_data` is set.
    pub fn seed_sample_data(&self) -> Result<()> {
        let snapshot = self.collection.load()?;
        if !snapshot.records.is_empty() || snapshot.revision != 0 {
            return Ok(());
        }

        let today = Utc::now().date_naive();
        let samples = [
            ("Salary", dec!(3500.00), TransactionKind::Income, Category::Salary),
            ("Rent", dec!(1200.00), TransactionKind::Expense, Category::Housing),
            ("Groceries", dec!(450.00), TransactionKind::Expense, Category::Food),
            ("Freelance", dec!(800.00), TransactionKind::Income, Category::Freelance),
        ];

        let mut records = Vec::with_capacity(samples.len());
        for (description, amount, kind, category) in samples {
            let id = next_record_id(records.iter().map(|t: &Transaction| t.id));
            records.push(Transaction {
                id,
                kind,
                description: description.to_string(),
                amount,
                category,
                date: today,
                created_at: Utc::now(),
            });
        }
        self.collection.save(records, snapshot.revision)?;
        Ok(())
    }
}

impl TransactionServiceTrait for TransactionService {
    fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let mut snapshot = self.collection.load()?;
        let transaction = Transaction {
            id: next_record_id(snapshot.records.iter().map(|t| t.id)),
            kind: new_transaction.kind,
            description: new_transaction.description,
            amount: new_transaction.amount,
            category: new_transaction.category,
            date: new_transaction.date,
            created_at: Utc::now(),
        };

        // Newest first.
        snapshot.records.insert(0, transaction.clone());
        self.collection.save(snapshot.records, snapshot.revision)?;
        Ok(transaction)
    }

    fn delete_transaction(&self, id: i64) -> Result<()> {
        let snapshot = self.collection.load()?;
        let before = snapshot.records.len();
        let records: Vec<Transaction> = snapshot
            .records
            .into_iter()
            .filter(|t| t.id != id)
            .collect();
        if records.len() == before {
            return Ok(());
        }
        self.collection.save(records, snapshot.revision)?;
        Ok(())
    }

    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.collection.load()?.records)
    }

    fn get_filtered_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        let snapshot = self.collection.load()?;
        Ok(snapshot
            .records
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect())
    }

    fn get_total_income(&self) -> Result<Decimal> {
        let snapshot = self.collection.load()?;
        Ok(total_of_kind(&snapshot.records, TransactionKind::Income))
    }

    fn get_total_expense(&self) -> Result<Decimal> {
        let snapshot = self.collection.load()?;
        Ok(total_of_kind(&snapshot.records, TransactionKind::Expense))
    }

    fn get_total_balance(&self) -> Result<Decimal> {
        let snapshot = self.collection.load()?;
        Ok(balance_of(&snapshot.records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    struct FixedSession(&'static str);

    impl SessionTrait for FixedSession {
        fn current_user(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn service() -> TransactionService {
        TransactionService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedSession("alice")),
            "finapp",
        )
    }

    fn new_tx(kind: TransactionKind, description: &str, amount: Decimal) -> NewTransaction {
        NewTransaction {
            kind,
            description: description.to_string(),
            amount,
            category: Category::Other,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    #[test]
    fn empty_collection_balances_to_zero() {
        let service = service();
        assert_eq!(service.get_total_balance().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn balance_scenario() {
        let service = service();
        service
            .add_transaction(new_tx(TransactionKind::Income, "Salary", dec!(3500.00)))
            .unwrap();
        service
            .add_transaction(new_tx(TransactionKind::Expense, "Rent", dec!(1200.00)))
            .unwrap();
        service
            .add_transaction(new_tx(TransactionKind::Expense, "Groceries", dec!(450.00)))
            .unwrap();
        service
            .add_transaction(new_tx(TransactionKind::Income, "Freelance", dec!(800.00)))
            .unwrap();

        assert_eq!(service.get_total_income().unwrap(), dec!(4300.00));
        assert_eq!(service.get_total_expense().unwrap(), dec!(1650.00));
        assert_eq!(service.get_total_balance().unwrap(), dec!(2650.00));
    }

    #[test]
    fn newest_transaction_comes_first() {
        let service = service();
        service
            .add_transaction(new_tx(TransactionKind::Income, "first", dec!(1)))
            .unwrap();
        service
            .add_transaction(new_tx(TransactionKind::Income, "second", dec!(2)))
            .unwrap();

        let transactions = service.get_transactions().unwrap();
        assert_eq!(transactions[0].description, "second");
        assert_eq!(transactions[1].description, "first");
    }

    #[test]
    fn filter_preserves_order() {
        let service = service();
        service
            .add_transaction(new_tx(TransactionKind::Income, "a", dec!(1)))
            .unwrap();
        service
            .add_transaction(new_tx(TransactionKind::Expense, "b", dec!(2)))
            .unwrap();
        service
            .add_transaction(new_tx(TransactionKind::Income, "c", dec!(3)))
            .unwrap();

        let incomes = service
            .get_filtered_transactions(TransactionFilter::Income)
            .unwrap();
        let descriptions: Vec<&str> = incomes.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["c", "a"]);

        let all = service
            .get_filtered_transactions(TransactionFilter::All)
            .unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn delete_by_id_removes_only_that_record() {
        let service = service();
        let kept = service
            .add_transaction(new_tx(TransactionKind::Income, "keep", dec!(10)))
            .unwrap();
        let removed = service
            .add_transaction(new_tx(TransactionKind::Expense, "drop", dec!(5)))
            .unwrap();

        service.delete_transaction(removed.id).unwrap();
        let transactions = service.get_transactions().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, kept.id);
    }

    #[test]
    fn delete_of_missing_id_is_a_noop() {
        let service = service();
        service
            .add_transaction(new_tx(TransactionKind::Income, "keep", dec!(10)))
            .unwrap();
        service.delete_transaction(-1).unwrap();
        assert_eq!(service.get_transactions().unwrap().len(), 1);
    }

    #[test]
    fn rejects_non_positive_amounts_and_blank_descriptions() {
        let service = service();
        assert!(service
            .add_transaction(new_tx(TransactionKind::Income, "x", dec!(0)))
            .is_err());
        assert!(service
            .add_transaction(new_tx(TransactionKind::Income, "x", dec!(-3)))
            .is_err());
        assert!(service
            .add_transaction(new_tx(TransactionKind::Income, "   ", dec!(1)))
            .is_err());
    }

    #[test]
    fn sample_data_seeds_once_and_matches_expected_totals() {
        let service = service();
        service.seed_sample_data().unwrap();
        service.seed_sample_data().unwrap();

        assert_eq!(service.get_transactions().unwrap().len(), 4);
        assert_eq!(service.get_total_balance().unwrap(), dec!(2650.00));
    }

    #[test]
    fn sample_data_does_not_overwrite_existing_records() {
        let service = service();
        service
            .add_transaction(new_tx(TransactionKind::Income, "mine", dec!(1)))
            .unwrap();
        service.seed_sample_data().unwrap();
        assert_eq!(service.get_transactions().unwrap().len(), 1);
    }
}
