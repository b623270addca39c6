use once_cell::sync::OnceCell;
use tracing::info;

use crate::config::PaymentConfig;
use crate::error::PaymentError;

/// Handle to the payment provider, bound to a publishable key.
///
/// Publishable keys are client-safe. The handle only hands the key to the
/// browser, which initialises the provider SDK with it; it never calls the
/// provider API itself.
#[derive(Debug)]
pub struct PaymentClient {
    publishable_key: String,
}

impl PaymentClient {
    pub fn new(config: PaymentConfig) -> Result<Self, PaymentError> {
        let publishable_key = config.publishable_key.trim();
        if publishable_key.is_empty() {
            return Err(PaymentError::MissingPublishableKey);
        }

        Ok(Self {
            publishable_key: publishable_key.to_string(),
        })
    }

    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    /// `test` or `live`, taken from the key's `pk_<mode>_` prefix
    pub fn mode(&self) -> Option<&str> {
        self.publishable_key
            .strip_prefix("pk_")
            .and_then(|rest| rest.split_once('_'))
            .map(|(mode, _)| mode)
    }
}

enum KeySource {
    Env,
    Fixed(PaymentConfig),
}

/// Lazily creates the [`PaymentClient`] on first use and hands out the same
/// instance afterwards.
///
/// A missing key is reported on every call until one is configured; nothing
/// is cached on failure.
pub struct PaymentClientProvider {
    source: KeySource,
    client: OnceCell<PaymentClient>,
}

impl PaymentClientProvider {
    /// Read the key from the environment when the client is first requested
    pub fn from_env() -> Self {
        Self {
            source: KeySource::Env,
            client: OnceCell::new(),
        }
    }

    pub fn with_config(config: PaymentConfig) -> Self {
        Self {
            source: KeySource::Fixed(config),
            client: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<&PaymentClient, PaymentError> {
        self.client.get_or_try_init(|| {
            let config = match &self.source {
                KeySource::Env => PaymentConfig::load()?,
                KeySource::Fixed(config) => config.clone(),
            };
            let client = PaymentClient::new(config)?;
            info!(mode = client.mode().unwrap_or("unknown"), "Payment client initialized");
            Ok(client)
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}
