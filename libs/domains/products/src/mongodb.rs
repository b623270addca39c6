//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{Collection, MongoConnector};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    IndexModel,
};
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, SearchHit};
use crate::repository::ProductRepository;

pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
///
/// Collections are resolved through the shared [`MongoConnector`] on every
/// call, so a repository can be built before the database is reachable.
pub struct MongoProductRepository {
    connector: Arc<MongoConnector>,
    collection_name: String,
}

impl MongoProductRepository {
    pub fn new(connector: Arc<MongoConnector>) -> Self {
        Self::with_collection(connector, DEFAULT_COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(connector: Arc<MongoConnector>, collection_name: &str) -> Self {
        Self {
            connector,
            collection_name: collection_name.to_string(),
        }
    }

    async fn collection<T: Send + Sync>(&self) -> ProductResult<Collection<T>> {
        let db = self.connector.database().await?;
        Ok(db.collection::<T>(&self.collection_name))
    }

    /// Initialize indexes for id lookups, category listing and text search
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_id_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text", "category": "text" })
                .options(
                    IndexOptions::builder()
                        .name("idx_text_search".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection::<Product>()
            .await?
            .create_indexes(indexes)
            .await?;
        tracing::info!(collection = %self.collection_name, "Product indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        let values = self
            .collection::<Product>()
            .await?
            .distinct("category", doc! {})
            .await?;

        let categories = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                other => {
                    tracing::debug!(value = %other, "Skipping non-string category");
                    None
                }
            })
            .collect();

        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let product = self
            .collection::<Product>()
            .await?
            .find_one(doc! { "id": id })
            .await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn text_search(&self, query: &str, limit: i64) -> ProductResult<Vec<SearchHit>> {
        let score = doc! { "score": { "$meta": "textScore" } };

        let cursor = self
            .collection::<SearchHit>()
            .await?
            .find(doc! { "$text": { "$search": query } })
            .projection(score.clone())
            .sort(score)
            .limit(limit)
            .await?;
        let hits: Vec<SearchHit> = cursor.try_collect().await?;

        tracing::debug!(hits = hits.len(), "Text search completed");
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::MongoConfig;

    #[tokio::test]
    async fn test_unreachable_database_maps_to_database_error() {
        let connector = Arc::new(MongoConnector::new(MongoConfig::new("not-a-mongo-url")));
        let repository = MongoProductRepository::new(connector);

        let err = repository.find_by_id(1).await.unwrap_err();
        assert!(matches!(err, crate::ProductError::Database(_)));
    }
}
