//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use database::mongodb::{MongoConfig, MongoConnector};
use mongodb::{Client, Database};
use std::sync::Arc;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let connector = mongo.connector();
/// let db = connector.database().await.unwrap();
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    config: MongoConfig,
}

impl TestMongo {
    /// Start a MongoDB 7 container using the `storefront_test` database
    pub async fn new() -> Self {
        Self::with_database("storefront_test").await
    }

    pub async fn with_database(database: &str) -> Self {
        let container = Mongo::default()
            .with_tag("7.0")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let url = format!("mongodb://127.0.0.1:{}", host_port);
        let config = MongoConfig::with_database(url, database).with_app_name("test-utils");

        let client = Client::with_uri_str(config.url())
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready (mongo 7.0)");

        Self {
            container,
            client,
            config,
        }
    }

    /// A connector that is already connected to the container
    pub fn connector(&self) -> Arc<MongoConnector> {
        Arc::new(MongoConnector::with_client(
            self.config.clone(),
            self.client.clone(),
        ))
    }

    pub fn database(&self) -> Database {
        self.client.database(self.config.database())
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    /// Get the connection string for manual client creation
    pub fn connection_string(&self) -> &str {
        self.config.url()
    }
}

// Container is automatically cleaned up when TestMongo is dropped
impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Document, doc};

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_mongo_insert_find() {
        let mongo = TestMongo::new().await;
        let collection = mongo.database().collection::<Document>("items");

        collection.insert_one(doc! { "id": 1 }).await.unwrap();
        let found = collection.find_one(doc! { "id": 1 }).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_connector_is_preconnected() {
        let mongo = TestMongo::new().await;
        let connector = mongo.connector();

        assert!(connector.is_connected());
        assert_eq!(connector.config().database(), "storefront_test");
    }
}
