use rust_decimal::Decimal;

use crate::errors::Result;

use super::transactions_model::{NewTransaction, Transaction, TransactionFilter};

/// Trait for transaction operations over the current user's collection.
pub trait TransactionServiceTrait: Send + Sync {
    /// Records a new transaction, newest first. Returns the stored record.
    fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Removes a transaction by id. Missing ids are a silent no-op.
    fn delete_transaction(&self, id: i64) -> Result<()>;

    fn get_transactions(&self) -> Result<Vec<Transaction>>;

    /// Lists transactions matching `filter`, preserving stored order.
    fn get_filtered_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>>;

    fn get_total_income(&self) -> Result<Decimal>;

    fn get_total_expense(&self) -> Result<Decimal>;

    /// Income minus expense over the whole collection.
    fn get_total_balance(&self) -> Result<Decimal>;
}
