//! Transactions module - domain models, service, and traits.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{
    Category, NewTransaction, Transaction, TransactionFilter, TransactionKind,
};
pub use transactions_service::{balance_of, total_of_kind, TransactionService};
pub use transactions_traits::TransactionServiceTrait;
