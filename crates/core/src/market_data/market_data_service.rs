use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use log::debug;
use num_traits::FromPrimitive;
use rand::Rng;
use rust_decimal::Decimal;
use tokio::task::JoinHandle;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

use super::market_data_constants::{seed_quotes, MAX_TICK_DELTA, PRICE_FLOOR};
use super::market_data_model::Quote;
use super::market_data_traits::MarketDataServiceTrait;

/// Simulated price feed.
///
/// Two states: idle (no timer) and running (a repeating tokio interval task
/// perturbs every quote). The feed holds no persistence; dropping the service
/// aborts the task so no timer outlives its consumer.
pub struct MarketDataService {
    quotes: Arc<RwLock<Vec<Quote>>>,
    feed_handle: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl MarketDataService {
    pub fn new(interval: Duration) -> Self {
        MarketDataService {
            quotes: Arc::new(RwLock::new(seed_quotes())),
            feed_handle: Mutex::new(None),
            interval,
        }
    }

    /// Applies one random-walk step to every quote.
    ///
    /// The price moves by a bounded random delta, floored at [`PRICE_FLOOR`];
    /// `change` and `change_percent` are derived from the actual delta so the
    /// three fields always agree.
    fn apply_tick(quotes: &RwLock<Vec<Quote>>) {
        let mut rng = rand::thread_rng();
        let mut quotes = quotes.write().unwrap_or_else(|e| e.into_inner());
        for quote in quotes.iter_mut() {
            let delta = Decimal::from_f64(rng.gen_range(-MAX_TICK_DELTA..=MAX_TICK_DELTA))
                .unwrap_or(Decimal::ZERO);
            let previous = quote.price;
            let next = (previous + delta)
                .round_dp(DISPLAY_DECIMAL_PRECISION)
                .max(PRICE_FLOOR);

            quote.change = next - previous;
            quote.change_percent = if previous.is_zero() {
                Decimal::ZERO
            } else {
                (quote.change / previous * Decimal::ONE_HUNDRED)
                    .round_dp(DISPLAY_DECIMAL_PRECISION)
            };
            quote.price = next;
        }
    }
}

impl MarketDataServiceTrait for MarketDataService {
    fn get_quotes(&self) -> Vec<Quote> {
        self.quotes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn find_quote(&self, symbol: &str) -> Option<Quote> {
        self.quotes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|q| q.symbol == symbol)
            .cloned()
    }

    fn search_quotes(&self, query: &str) -> Vec<Quote> {
        let query = query.to_lowercase();
        self.quotes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|q| {
                q.symbol.to_lowercase().contains(&query)
                    || q.name.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    fn start_feed(&self) -> bool {
        let mut handle = self.feed_handle.lock().unwrap_or_else(|e| e.into_inner());
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            return false;
        }

        debug!("Starting simulated price feed ({:?} interval)", self.interval);
        let quotes = Arc::clone(&self.quotes);
        let interval = self.interval;
        *handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick of a tokio interval fires immediately; consume
            // it so the first perturbation happens one full interval in.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                Self::apply_tick(&quotes);
            }
        }));
        true
    }

    fn stop_feed(&self) -> bool {
        let mut handle = self.feed_handle.lock().unwrap_or_else(|e| e.into_inner());
        match handle.take() {
            Some(task) => {
                debug!("Stopping simulated price feed");
                task.abort();
                true
            }
            None => false,
        }
    }

    fn is_feed_running(&self) -> bool {
        self.feed_handle
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    fn tick_now(&self) {
        Self::apply_tick(&self.quotes);
    }
}

impl Drop for MarketDataService {
    fn drop(&mut self) {
        if let Some(task) = self
            .feed_handle
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            task.abort();
        }
    }
}
