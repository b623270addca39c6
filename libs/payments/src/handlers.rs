//! Browser-facing payment configuration

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::responses::InternalServerErrorResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::client::PaymentClientProvider;
use crate::error::PaymentError;

#[derive(OpenApi)]
#[openapi(
    paths(payment_config),
    components(
        schemas(PaymentConfigResponse),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Payments", description = "Payment provider configuration")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfigResponse {
    #[schema(example = "pk_test_51H...")]
    pub publishable_key: String,
}

/// Mount under `/api`
pub fn router(provider: Arc<PaymentClientProvider>) -> Router {
    Router::new()
        .route("/payments/config", get(payment_config))
        .with_state(provider)
}

/// Publishable key for initialising the provider SDK in the browser
#[utoipa::path(
    get,
    path = "/payments/config",
    tag = "Payments",
    responses(
        (status = 200, description = "Payment provider configuration", body = PaymentConfigResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn payment_config(
    State(provider): State<Arc<PaymentClientProvider>>,
) -> Result<Json<PaymentConfigResponse>, PaymentError> {
    let client = provider.get()?;
    Ok(Json(PaymentConfigResponse {
        publishable_key: client.publishable_key().to_string(),
    }))
}
