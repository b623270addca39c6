//! API routes module

pub mod health;

use axum::Router;
use domain_products::{handlers as catalogue, MongoProductRepository, ProductService};

use crate::state::AppState;

/// Routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.connector.clone());

    Router::new()
        .merge(catalogue::router(ProductService::new(repository)))
        .merge(payments::handlers::router(state.payments.clone()))
}

/// Create the product collection indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    MongoProductRepository::new(state.connector.clone())
        .init_indexes()
        .await?;
    Ok(())
}
