use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::auth::SessionTrait;
use crate::constants::GOALS_COLLECTION;
use crate::errors::{Result, ValidationError};
use crate::store::{CollectionStore, KvStore};
use crate::utils::next_record_id;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::GoalServiceTrait;

pub struct GoalService {
    collection: CollectionStore<Goal>,
}

impl GoalService {
    pub fn new(
        store: Arc<dyn KvStore>,
        session: Arc<dyn SessionTrait>,
        namespace: &str,
    ) -> Self {
        GoalService {
            collection: CollectionStore::new(store, session, namespace, GOALS_COLLECTION),
        }
    }

    fn find(&self, id: i64) -> Result<Option<Goal>> {
        let snapshot = self.collection.load()?;
        Ok(snapshot.records.into_iter().find(|g| g.id == id))
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.collection.load()?.records)
    }

    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        let mut snapshot = self.collection.load()?;
        let goal = Goal {
            id: next_record_id(snapshot.records.iter().map(|g| g.id)),
            title: new_goal.title,
            description: new_goal.description,
            target: new_goal.target,
            current: Decimal::ZERO,
            image: new_goal.image,
            created_at: Utc::now(),
        };

        snapshot.records.push(goal.clone());
        self.collection.save(snapshot.records, snapshot.revision)?;
        Ok(goal)
    }

    fn update_goal(&self, id: i64, update: GoalUpdate) -> Result<()> {
        update.validate()?;

        let mut snapshot = self.collection.load()?;
        let Some(goal) = snapshot.records.iter_mut().find(|g| g.id == id) else {
            return Ok(());
        };

        goal.title = update.title;
        goal.description = update.description;
        goal.target = update.target;
        if update.image.is_some() {
            goal.image = update.image;
        }
        self.collection.save(snapshot.records, snapshot.revision)?;
        Ok(())
    }

    fn delete_goal(&self, id: i64) -> Result<()> {
        let snapshot = self.collection.load()?;
        let before = snapshot.records.len();
        let records: Vec<Goal> = snapshot.records.into_iter().filter(|g| g.id != id).collect();
        if records.len() == before {
            return Ok(());
        }
        self.collection.save(records, snapshot.revision)?;
        Ok(())
    }

    fn add_money(&self, id: i64, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("amount must be positive".to_string()).into(),
            );
        }

        let mut snapshot = self.collection.load()?;
        let Some(goal) = snapshot.records.iter_mut().find(|g| g.id == id) else {
            return Ok(());
        };
        goal.current += amount;
        self.collection.save(snapshot.records, snapshot.revision)?;
        Ok(())
    }

    fn get_goal_progress(&self, id: i64) -> Result<Decimal> {
        Ok(self
            .find(id)?
            .map(|g| g.progress_percent())
            .unwrap_or(Decimal::ZERO))
    }

    fn is_goal_completed(&self, id: i64) -> Result<bool> {
        Ok(self.find(id)?.map(|g| g.is_completed()).unwrap_or(false))
    }
}
