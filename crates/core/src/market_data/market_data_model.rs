//! Market data domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A simulated stock quote.
///
/// Ephemeral: quotes are never persisted and reset to the seed list on
/// restart. Identity is the symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    /// Price delta applied by the last feed tick.
    pub change: Decimal,
    /// `change` relative to the pre-tick price, in percent.
    pub change_percent: Decimal,
}
