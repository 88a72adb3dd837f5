/// Default storage namespace prefix for per-user keys.
pub const DEFAULT_NAMESPACE: &str = "finapp";

/// Global key holding the map of registered users.
pub const USERS_KEY: &str = "users";

/// Global key holding the active session's username.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Global key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Per-user collection key suffixes.
pub const TRANSACTIONS_COLLECTION: &str = "transactions";
pub const GOALS_COLLECTION: &str = "goals";
pub const PORTFOLIO_COLLECTION: &str = "portfolio";
pub const FAVORITES_COLLECTION: &str = "favorites";

/// Version written into every persisted collection envelope.
pub const COLLECTION_SCHEMA_VERSION: u32 = 1;

/// Default simulated feed tick interval in seconds.
pub const DEFAULT_FEED_INTERVAL_SECS: u64 = 30;

/// Decimal precision for display values.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
