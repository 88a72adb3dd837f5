//! Application configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FEED_INTERVAL_SECS, DEFAULT_NAMESPACE};
use crate::errors::{Error, Result};

/// Configuration for an application instance.
///
/// Both seed toggles default to off: the historic `admin`/`admin123` account
/// and the example transactions are provisioned only when explicitly enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Prefix for all per-user storage keys.
    pub namespace: String,
    /// Provision the `admin` seed account on startup.
    pub seed_default_admin: bool,
    /// Seed example transactions for users with no stored collection.
    pub seed_sample_data: bool,
    /// Simulated feed tick interval in seconds.
    pub feed_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            namespace: DEFAULT_NAMESPACE.to_string(),
            seed_default_admin: false,
            seed_sample_data: false,
            feed_interval_secs: DEFAULT_FEED_INTERVAL_SECS,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let config: AppConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::InvalidConfigValue(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(Error::InvalidConfigValue(
                "namespace must not be empty".to_string(),
            ));
        }
        if self.feed_interval_secs == 0 {
            return Err(Error::InvalidConfigValue(
                "feedIntervalSecs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
