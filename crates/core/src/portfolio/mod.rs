//! Portfolio module - simulated positions, favorites, and summary aggregates.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::{NewPosition, PortfolioSummary, Position};
pub use portfolio_service::{summarize, PortfolioService};
pub use portfolio_traits::PortfolioServiceTrait;
