//! Auth domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as persisted in the global user map.
///
/// Secrets are never stored in clear: only the salted SHA-256 digest is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
}
