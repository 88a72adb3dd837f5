//! Service wiring.
//!
//! One [`AppContext`] per application instance; all services share the same
//! store and session, with no ambient globals.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthService, AuthServiceTrait, SessionTrait};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::goals::GoalService;
use crate::market_data::MarketDataService;
use crate::portfolio::PortfolioService;
use crate::settings::SettingsService;
use crate::store::KvStore;
use crate::transactions::TransactionService;

pub struct AppContext {
    pub config: AppConfig,
    pub auth_service: Arc<AuthService>,
    pub transaction_service: Arc<TransactionService>,
    pub goal_service: Arc<GoalService>,
    pub portfolio_service: Arc<PortfolioService>,
    pub market_data_service: Arc<MarketDataService>,
    pub settings_service: Arc<SettingsService>,
}

impl AppContext {
    /// Builds the full service graph over `store`.
    pub fn build(store: Arc<dyn KvStore>, config: AppConfig) -> Result<Arc<Self>> {
        let auth_service = Arc::new(AuthService::new(Arc::clone(&store))?);
        if config.seed_default_admin {
            auth_service.seed_default_admin()?;
        }
        let session: Arc<dyn SessionTrait> = auth_service.clone();

        let market_data_service = Arc::new(MarketDataService::new(Duration::from_secs(
            config.feed_interval_secs,
        )));
        let transaction_service = Arc::new(TransactionService::new(
            Arc::clone(&store),
            Arc::clone(&session),
            &config.namespace,
        ));
        let goal_service = Arc::new(GoalService::new(
            Arc::clone(&store),
            Arc::clone(&session),
            &config.namespace,
        ));
        let portfolio_service = Arc::new(PortfolioService::new(
            Arc::clone(&store),
            Arc::clone(&session),
            market_data_service.clone(),
            &config.namespace,
        ));
        let settings_service = Arc::new(SettingsService::new(store));

        Ok(Arc::new(AppContext {
            config,
            auth_service,
            transaction_service,
            goal_service,
            portfolio_service,
            market_data_service,
            settings_service,
        }))
    }

    /// Logs in and, when configured, seeds example data for a fresh user.
    pub fn login(&self, username: &str, secret: &str) -> Result<bool> {
        if !self.auth_service.login(username, secret)? {
            return Ok(false);
        }
        if self.config.seed_sample_data {
            self.transaction_service.seed_sample_data()?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::transactions::TransactionServiceTrait;
    use rust_decimal_macros::dec;

    fn context(config: AppConfig) -> Arc<AppContext> {
        AppContext::build(Arc::new(MemoryStore::new()), config).unwrap()
    }

    #[test]
    fn seed_admin_is_wired_through_config() {
        let ctx = context(AppConfig {
            seed_default_admin: true,
            ..AppConfig::default()
        });
        assert!(ctx.login("admin", "admin123").unwrap());

        let bare = context(AppConfig::default());
        assert!(!bare.login("admin", "admin123").unwrap());
    }

    #[test]
    fn sample_data_is_seeded_on_first_login_only_when_enabled() {
        let ctx = context(AppConfig {
            seed_default_admin: true,
            seed_sample_data: true,
            ..AppConfig::default()
        });
        ctx.login("admin", "admin123").unwrap();
        assert_eq!(
            ctx.transaction_service.get_total_balance().unwrap(),
            dec!(2650.00)
        );

        let bare = context(AppConfig {
            seed_default_admin: true,
            ..AppConfig::default()
        });
        bare.login("admin", "admin123").unwrap();
        assert!(bare.transaction_service.get_transactions().unwrap().is_empty());
    }
}
