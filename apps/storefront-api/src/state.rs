//! Application state management

use database::mongodb::MongoConnector;
use payments::PaymentClientProvider;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Built once in `main` and handed to every router. Neither the database nor
/// the payment client is contacted here; both connect on first use.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub connector: Arc<MongoConnector>,
    pub payments: Arc<PaymentClientProvider>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let connector = Arc::new(MongoConnector::new(config.mongodb.clone()));
        Self {
            config,
            connector,
            payments: Arc::new(PaymentClientProvider::from_env()),
        }
    }
}
