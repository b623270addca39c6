use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use super::MongoConfig;

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Build a client from `config` and verify it with a `ping`.
///
/// Dials once; there is no retry loop. Callers that need a shared, lazily
/// connected client should go through [`MongoConnector`].
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(database = %config.database, "Connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!(database = %config.database, "Connected to MongoDB");
    Ok(client)
}

/// Process-wide MongoDB connection with connect-if-not-connected semantics.
///
/// The connector is built once at startup and shared behind an `Arc`. The first
/// caller of [`MongoConnector::client`] dials; concurrent callers during that
/// window wait on the same initialisation and every later caller gets the same
/// [`Client`]. A failed dial leaves the connector empty, so the next request
/// dials again instead of caching the failure.
#[derive(Debug)]
pub struct MongoConnector {
    config: MongoConfig,
    client: OnceCell<Client>,
}

impl MongoConnector {
    pub fn new(config: MongoConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Wrap an already connected client, e.g. one created by a test harness.
    pub fn with_client(config: MongoConfig, client: Client) -> Self {
        Self {
            config,
            client: OnceCell::new_with(Some(client)),
        }
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    /// Whether a live client has been established.
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// Return the shared client, connecting on first use.
    #[instrument(skip(self), fields(database = %self.config.database))]
    pub async fn client(&self) -> Result<&Client, MongoError> {
        self.client
            .get_or_try_init(|| connect_from_config(&self.config))
            .await
    }

    /// Return a handle to the configured database, connecting on first use.
    pub async fn database(&self) -> Result<Database, MongoError> {
        let client = self.client().await?;
        Ok(client.database(&self.config.database))
    }

    /// Close the connection pool if one was ever opened.
    pub async fn shutdown(&self) {
        if let Some(client) = self.client.get() {
            info!("Shutting down: closing MongoDB connections");
            client.clone().shutdown().await;
            info!("MongoDB connection closed");
        }
    }
}
