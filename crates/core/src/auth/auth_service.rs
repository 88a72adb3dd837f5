use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::warn;
use rand::RngCore;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::constants::{CURRENT_USER_KEY, USERS_KEY};
use crate::errors::{Result, StoreError, ValidationError};
use crate::store::KvStore;

use super::auth_model::UserAccount;
use super::auth_traits::{AuthServiceTrait, SessionTrait};

/// Username of the optional seed account.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Secret of the optional seed account. Only provisioned when explicitly
/// enabled in the configuration.
const DEFAULT_ADMIN_SECRET: &str = "admin123";

/// Session and identity holder.
///
/// The user map lives under the global `users` key; the active username is
/// persisted under `currentUser` so a restart restores the session.
pub struct AuthService {
    store: Arc<dyn KvStore>,
    current: RwLock<Option<String>>,
}

impl AuthService {
    /// Creates the service and restores any persisted session.
    pub fn new(store: Arc<dyn KvStore>) -> Result<Self> {
        let current = match store.get(CURRENT_USER_KEY)? {
            Some(Value::String(username)) => Some(username),
            Some(other) => {
                warn!("Ignoring malformed '{}' value: {}", CURRENT_USER_KEY, other);
                None
            }
            None => None,
        };
        Ok(AuthService {
            store,
            current: RwLock::new(current),
        })
    }

    /// Provisions the `admin` seed account if absent.
    ///
    /// Deliberately not called anywhere by default: the context wires it only
    /// when `AppConfig::seed_default_admin` is set.
    pub fn seed_default_admin(&self) -> Result<()> {
        let mut users = self.load_users()?;
        if users.contains_key(DEFAULT_ADMIN_USERNAME) {
            return Ok(());
        }
        users.insert(
            DEFAULT_ADMIN_USERNAME.to_string(),
            new_account(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_SECRET),
        );
        self.save_users(&users)
    }

    fn load_users(&self) -> Result<HashMap<String, UserAccount>> {
        match self.store.get(USERS_KEY)? {
            None => Ok(HashMap::new()),
            Some(value) => match serde_json::from_value(value) {
                Ok(users) => Ok(users),
                Err(e) => {
                    warn!("Malformed user map under '{}': {}", USERS_KEY, e);
                    Ok(HashMap::new())
                }
            },
        }
    }

    fn save_users(&self, users: &HashMap<String, UserAccount>) -> Result<()> {
        let value = serde_json::to_value(users).map_err(|e| StoreError::Serialization {
            key: USERS_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(USERS_KEY, value)
    }
}

impl SessionTrait for AuthService {
    fn current_user(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl AuthServiceTrait for AuthService {
    fn register(&self, username: &str, secret: &str) -> Result<bool> {
        validate_username(username)?;
        if secret.is_empty() {
            return Err(ValidationError::MissingField("secret".to_string()).into());
        }

        let mut users = self.load_users()?;
        if users.contains_key(username) {
            return Ok(false);
        }
        users.insert(username.to_string(), new_account(username, secret));
        self.save_users(&users)?;
        Ok(true)
    }

    fn login(&self, username: &str, secret: &str) -> Result<bool> {
        let users = self.load_users()?;
        let matched = users
            .get(username)
            .map(|account| hash_secret(secret, &account.salt) == account.password_hash)
            .unwrap_or(false);
        if !matched {
            return Ok(false);
        }

        self.store
            .set(CURRENT_USER_KEY, Value::String(username.to_string()))?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(username.to_string());
        Ok(true)
    }

    fn logout(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

fn new_account(username: &str, secret: &str) -> UserAccount {
    let salt = generate_salt();
    UserAccount {
        username: username.to_string(),
        password_hash: hash_secret(secret, &salt),
        salt,
        created_at: Utc::now(),
    }
}

fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn hash_secret(secret: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Usernames become part of storage keys, so the charset is restricted.
fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(ValidationError::MissingField("username".to_string()).into());
    }
    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !valid {
        return Err(ValidationError::InvalidInput(format!(
            "username '{}' contains unsupported characters",
            username
        ))
        .into());
    }
    Ok(())
}
