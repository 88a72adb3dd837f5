//! Authentication module - session holder, user registry, and traits.

mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_model::UserAccount;
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, SessionTrait};
