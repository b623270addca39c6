use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;

use crate::models::ProductId;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(ProductId),

    #[error("Query parameter is required")]
    MissingQuery,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::MissingQuery => AppError::BadRequest(err.to_string()),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<MongoError> for ProductError {
    fn from(err: MongoError) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_product_error_status_codes() {
        let cases = [
            (ProductError::NotFound(ProductId::Value(1)), StatusCode::NOT_FOUND),
            (ProductError::NotFound(ProductId::NaN), StatusCode::NOT_FOUND),
            (ProductError::MissingQuery, StatusCode::BAD_REQUEST),
            (
                ProductError::Database("socket closed".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message_hides_id() {
        let app_error: AppError = ProductError::NotFound(ProductId::Value(7)).into();
        assert!(matches!(app_error, AppError::NotFound(ref m) if m == "Product not found"));
    }

    #[test]
    fn test_missing_query_message() {
        let app_error: AppError = ProductError::MissingQuery.into();
        assert!(matches!(
            app_error,
            AppError::BadRequest(ref m) if m == "Query parameter is required"
        ));
    }
}
