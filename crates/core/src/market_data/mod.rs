//! Simulated market data module - quotes, search, and the periodic feed.

mod market_data_constants;
mod market_data_model;
mod market_data_service;
mod market_data_traits;

pub use market_data_constants::{seed_quotes, MAX_TICK_DELTA, PRICE_FLOOR};
pub use market_data_model::Quote;
pub use market_data_service::MarketDataService;
pub use market_data_traits::MarketDataServiceTrait;
