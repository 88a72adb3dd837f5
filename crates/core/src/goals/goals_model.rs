//! Goals domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A savings goal.
///
/// `current` starts at zero and only grows through add-money actions. There
/// is no ceiling: a goal can hold more than its target even though the
/// progress display saturates at 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target: Decimal,
    pub current: Decimal,
    /// Text-encoded image data, owned by the goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Progress toward the target, clamped to [0, 100].
    pub fn progress_percent(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return if self.current >= self.target {
                dec!(100)
            } else {
                Decimal::ZERO
            };
        }
        ((self.current / self.target) * dec!(100)).clamp(Decimal::ZERO, dec!(100))
    }

    /// Unclamped completion check: `current >= target`.
    pub fn is_completed(&self) -> bool {
        self.current >= self.target
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub target: Decimal,
    pub image: Option<String>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if self.target <= Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("target must be positive".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Input model for editing an existing goal.
///
/// `image: None` keeps the stored image; `Some` replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub title: String,
    pub description: Option<String>,
    pub target: Decimal,
    pub image: Option<String>,
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if self.target <= Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("target must be positive".to_string()).into(),
            );
        }
        Ok(())
    }
}
