use rust_decimal::Decimal;

use crate::errors::Result;

use super::goals_model::{Goal, GoalUpdate, NewGoal};

/// Trait for goal operations over the current user's collection.
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;

    /// Creates a goal with `current = 0`, appended after existing goals.
    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Edits a goal's fields. Missing ids are a silent no-op.
    fn update_goal(&self, id: i64, update: GoalUpdate) -> Result<()>;

    /// Removes a goal by id. Missing ids are a silent no-op.
    fn delete_goal(&self, id: i64) -> Result<()>;

    /// Increases a goal's saved amount. Missing ids are a silent no-op.
    fn add_money(&self, id: i64, amount: Decimal) -> Result<()>;

    /// Clamped progress percentage; 0 for unknown ids.
    fn get_goal_progress(&self, id: i64) -> Result<Decimal>;

    /// Unclamped completion check; false for unknown ids.
    fn is_goal_completed(&self, id: i64) -> Result<bool>;
}
