//! Portfolio domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A simulated holding keyed by symbol.
///
/// Only the base fields are persisted; the monetary aggregates are derived on
/// read so they always reflect the latest quote price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    pub average_price: Decimal,
    pub current_price: Decimal,
}

impl Position {
    pub fn total_invested(&self) -> Decimal {
        Decimal::from(self.quantity) * self.average_price
    }

    pub fn current_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.current_price
    }

    pub fn profit(&self) -> Decimal {
        self.current_value() - self.total_invested()
    }

    /// Price appreciation relative to the average purchase price, in percent.
    pub fn profit_percent(&self) -> Decimal {
        if self.average_price.is_zero() {
            return Decimal::ZERO;
        }
        (self.current_price - self.average_price) / self.average_price * Decimal::ONE_HUNDRED
    }
}

/// Input model for adding (or replacing) a position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosition {
    pub symbol: String,
    pub quantity: u32,
    pub average_price: Decimal,
}

impl NewPosition {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.quantity == 0 {
            return Err(
                ValidationError::InvalidInput("quantity must be positive".to_string()).into(),
            );
        }
        if self.average_price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "averagePrice must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Derived totals over all positions. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub total_profit: Decimal,
}
