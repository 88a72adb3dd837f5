//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// The fixed category tags a transaction can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    Food,
    Transport,
    Housing,
    Entertainment,
    Health,
    Education,
    Other,
}

/// A recorded income or expense entry.
///
/// Records are immutable once created: they are added and removed, never
/// patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "amount must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Predicate used when listing transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionFilter {
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => transaction.kind == TransactionKind::Income,
            TransactionFilter::Expense => transaction.kind == TransactionKind::Expense,
        }
    }
}
