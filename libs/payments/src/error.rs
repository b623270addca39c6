use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment publishable key is not configured (set STRIPE_PUBLISHABLE_KEY)")]
    MissingPublishableKey,
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
