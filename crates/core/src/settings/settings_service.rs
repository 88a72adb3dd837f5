use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::constants::DARK_MODE_KEY;
use crate::errors::Result;
use crate::store::KvStore;

/// Trait for application-wide (not per-user) settings.
pub trait SettingsServiceTrait: Send + Sync {
    /// Whether dark mode is on. Defaults to false when unset.
    fn is_dark_mode(&self) -> Result<bool>;

    fn set_dark_mode(&self, enabled: bool) -> Result<()>;
}

pub struct SettingsService {
    store: Arc<dyn KvStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        SettingsService { store }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn is_dark_mode(&self) -> Result<bool> {
        match self.store.get(DARK_MODE_KEY)? {
            None => Ok(false),
            Some(Value::Bool(enabled)) => Ok(enabled),
            Some(other) => {
                warn!("Ignoring malformed '{}' value: {}", DARK_MODE_KEY, other);
                Ok(false)
            }
        }
    }

    fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.store.set(DARK_MODE_KEY, Value::Bool(enabled))
    }
}
