use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, SearchHit};

/// Read access to the product catalogue
///
/// Implementations return raw store order; ranking and de-duplication rules
/// live in [`crate::service::ProductService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Distinct string values of the `category` field
    async fn distinct_categories(&self) -> ProductResult<Vec<String>>;

    /// The product whose numeric `id` equals `id`
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Full-text search over name, description and category, best match first
    async fn text_search(&self, query: &str, limit: i64) -> ProductResult<Vec<SearchHit>>;
}
