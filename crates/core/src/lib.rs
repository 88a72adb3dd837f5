//! Finapp Core - domain entities, services, and traits.
//!
//! This crate contains the business logic for the personal finance tracker:
//! authentication and session handling, per-user transaction/goal/portfolio
//! collections, derived aggregates, and the simulated quote feed. It is
//! storage-agnostic and defines the [`store::KvStore`] trait implemented by
//! backend crates such as `finapp-storage-file`.

pub mod auth;
pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod goals;
pub mod market_data;
pub mod portfolio;
pub mod settings;
pub mod store;
pub mod transactions;
pub mod utils;

pub use config::AppConfig;
pub use context::AppContext;
pub use errors::Error;
pub use errors::Result;
