use super::market_data_model::Quote;

/// Trait for the simulated quote source.
pub trait MarketDataServiceTrait: Send + Sync {
    /// Snapshot of all quotes.
    fn get_quotes(&self) -> Vec<Quote>;

    /// Looks up one quote by exact symbol.
    fn find_quote(&self, symbol: &str) -> Option<Quote>;

    /// Case-insensitive substring search over symbol and name.
    fn search_quotes(&self, query: &str) -> Vec<Quote>;

    /// Schedules the periodic feed. Returns `false` if already running.
    ///
    /// Must be called from within a tokio runtime: the feed runs as a
    /// spawned task on the ambient runtime.
    fn start_feed(&self) -> bool;

    /// Cancels the periodic feed. Returns `false` if it was idle.
    fn stop_feed(&self) -> bool;

    fn is_feed_running(&self) -> bool;

    /// Advances the simulation by one tick without waiting for the timer.
    fn tick_now(&self);
}
