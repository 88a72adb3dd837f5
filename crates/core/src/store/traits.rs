use serde_json::Value;

use crate::errors::Result;

/// Contract for the persistent key-value backing medium.
///
/// Keys are plain strings; values are JSON documents. There are no
/// transactions and no expiry. Implementations must surface backend failures
/// as [`crate::errors::StoreError`] instead of swallowing them.
pub trait KvStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Durably writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Removes `key` if present. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
