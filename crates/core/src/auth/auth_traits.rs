use crate::errors::Result;

/// Read-only view of the active session.
///
/// Collection stores resolve their namespaced keys through this trait so that
/// all per-user access is gated on a logged-in user, with no ambient global.
pub trait SessionTrait: Send + Sync {
    /// Username of the logged-in user, if any.
    fn current_user(&self) -> Option<String>;
}

/// Trait for authentication operations.
pub trait AuthServiceTrait: SessionTrait {
    /// Registers a new user. Returns `false` if the username is taken.
    /// Does not log the user in.
    fn register(&self, username: &str, secret: &str) -> Result<bool>;

    /// Attempts a login. Returns `true` and activates the session iff the
    /// secret matches. Unknown user and wrong secret are indistinguishable.
    fn login(&self, username: &str, secret: &str) -> Result<bool>;

    /// Clears the active session.
    fn logout(&self) -> Result<()>;

    fn is_authenticated(&self) -> bool;
}
