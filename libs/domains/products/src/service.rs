//! Product Service - read-side rules for the storefront API

use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductId, SearchHit, SearchParams};
use crate::repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every distinct category, each listed once
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        let categories = self.repository.distinct_categories().await?;

        let mut seen = HashSet::with_capacity(categories.len());
        Ok(categories
            .into_iter()
            .filter(|category| seen.insert(category.clone()))
            .collect())
    }

    /// Look up a product by its storefront id.
    ///
    /// A `NaN` id cannot match anything and is answered without a query.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> ProductResult<Product> {
        let Some(value) = id.value() else {
            return Err(ProductError::NotFound(id));
        };

        self.repository
            .find_by_id(value)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Relevance-ranked full-text search.
    ///
    /// Hits are ordered by descending score and a positive `limit` caps their
    /// number even if the store returns more.
    #[instrument(skip(self, params), fields(q = ?params.q, limit = ?params.limit))]
    pub async fn search(&self, params: &SearchParams) -> ProductResult<Vec<SearchHit>> {
        let query = params.query().ok_or(ProductError::MissingQuery)?;
        let limit = params.limit();

        let mut hits = self.repository.text_search(query, limit).await?;
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        if let Ok(cap) = usize::try_from(limit) {
            if cap > 0 {
                hits.truncate(cap);
            }
        }

        Ok(hits)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
