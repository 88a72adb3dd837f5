use std::sync::Arc;

use rust_decimal::Decimal;

use crate::auth::SessionTrait;
use crate::constants::{FAVORITES_COLLECTION, PORTFOLIO_COLLECTION};
use crate::errors::Result;
use crate::market_data::MarketDataServiceTrait;
use crate::store::{CollectionStore, KvStore};

use super::portfolio_model::{NewPosition, PortfolioSummary, Position};
use super::portfolio_traits::PortfolioServiceTrait;

/// Derived totals over a position snapshot.
pub fn summarize(positions: &[Position]) -> PortfolioSummary {
    let total_invested: Decimal = positions.iter().map(Position::total_invested).sum();
    let current_value: Decimal = positions.iter().map(Position::current_value).sum();
    PortfolioSummary {
        total_invested,
        current_value,
        total_profit: current_value - total_invested,
    }
}

pub struct PortfolioService {
    positions: CollectionStore<Position>,
    favorites: CollectionStore<String>,
    market_data: Arc<dyn MarketDataServiceTrait>,
}

impl PortfolioService {
    pub fn new(
        store: Arc<dyn KvStore>,
        session: Arc<dyn SessionTrait>,
        market_data: Arc<dyn MarketDataServiceTrait>,
        namespace: &str,
    ) -> Self {
        PortfolioService {
            positions: CollectionStore::new(
                Arc::clone(&store),
                Arc::clone(&session),
                namespace,
                PORTFOLIO_COLLECTION,
            ),
            favorites: CollectionStore::new(store, session, namespace, FAVORITES_COLLECTION),
            market_data,
        }
    }

    /// Overlays the latest quote prices onto stored positions.
    ///
    /// The refresh is in-memory only; a position whose symbol has no quote
    /// keeps its stored price.
    fn refresh(&self, mut positions: Vec<Position>) -> Vec<Position> {
        for position in positions.iter_mut() {
            if let Some(quote) = self.market_data.find_quote(&position.symbol) {
                position.current_price = quote.price;
            }
        }
        positions
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn add_position(&self, new_position: NewPosition) -> Result<Option<Position>> {
        new_position.validate()?;

        let Some(quote) = self.market_data.find_quote(&new_position.symbol) else {
            return Ok(None);
        };

        let position = Position {
            symbol: quote.symbol,
            name: quote.name,
            quantity: new_position.quantity,
            average_price: new_position.average_price,
            current_price: quote.price,
        };

        let mut snapshot = self.positions.load()?;
        match snapshot
            .records
            .iter_mut()
            .find(|p| p.symbol == position.symbol)
        {
            Some(existing) => *existing = position.clone(),
            None => snapshot.records.push(position.clone()),
        }
        self.positions.save(snapshot.records, snapshot.revision)?;
        Ok(Some(position))
    }

    fn remove_position(&self, symbol: &str) -> Result<()> {
        let snapshot = self.positions.load()?;
        let before = snapshot.records.len();
        let records: Vec<Position> = snapshot
            .records
            .into_iter()
            .filter(|p| p.symbol != symbol)
            .collect();
        if records.len() == before {
            return Ok(());
        }
        self.positions.save(records, snapshot.revision)?;
        Ok(())
    }

    fn get_positions(&self) -> Result<Vec<Position>> {
        let snapshot = self.positions.load()?;
        Ok(self.refresh(snapshot.records))
    }

    fn get_summary(&self) -> Result<PortfolioSummary> {
        Ok(summarize(&self.get_positions()?))
    }

    fn toggle_favorite(&self, symbol: &str) -> Result<bool> {
        let mut snapshot = self.favorites.load()?;
        let now_favorite = match snapshot.records.iter().position(|s| s == symbol) {
            Some(index) => {
                snapshot.records.remove(index);
                false
            }
            None => {
                snapshot.records.push(symbol.to_string());
                true
            }
        };
        self.favorites.save(snapshot.records, snapshot.revision)?;
        Ok(now_favorite)
    }

    fn get_favorites(&self) -> Result<Vec<String>> {
        Ok(self.favorites.load()?.records)
    }

    fn is_favorite(&self, symbol: &str) -> Result<bool> {
        Ok(self.get_favorites()?.iter().any(|s| s == symbol))
    }
}
