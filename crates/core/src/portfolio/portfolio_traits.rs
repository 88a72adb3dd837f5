use crate::errors::Result;

use super::portfolio_model::{NewPosition, PortfolioSummary, Position};

/// Trait for portfolio operations over the current user's collections.
pub trait PortfolioServiceTrait: Send + Sync {
    /// Adds a position, resolving name and current price from the quote
    /// source. A symbol already held is replaced wholesale (no cost-basis
    /// averaging). Unknown symbols are a silent no-op returning `None`.
    fn add_position(&self, new_position: NewPosition) -> Result<Option<Position>>;

    /// Removes a position by symbol. Missing symbols are a silent no-op.
    fn remove_position(&self, symbol: &str) -> Result<()>;

    /// Positions with `current_price` refreshed against the latest quotes.
    fn get_positions(&self) -> Result<Vec<Position>>;

    /// Derived totals over all (refreshed) positions.
    fn get_summary(&self) -> Result<PortfolioSummary>;

    /// Toggles a symbol's membership in the favorites list. Returns whether
    /// the symbol is a favorite afterwards.
    fn toggle_favorite(&self, symbol: &str) -> Result<bool>;

    fn get_favorites(&self) -> Result<Vec<String>>;

    fn is_favorite(&self, symbol: &str) -> Result<bool>;
}
