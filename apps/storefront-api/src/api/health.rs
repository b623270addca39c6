//! Readiness endpoint

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::mongodb::{check_health_detailed, MongoConnector};
use std::sync::Arc;

use crate::state::AppState;

async fn mongodb_ready(connector: &MongoConnector) -> Result<(), String> {
    let client = connector.client().await.map_err(|e| e.to_string())?;
    let status = check_health_detailed(client).await;
    tracing::debug!(latency_ms = status.response_time_ms, "MongoDB ping");
    match status.message {
        None if status.healthy => Ok(()),
        message => Err(message.unwrap_or_else(|| "ping failed".to_string())),
    }
}

async fn ready(State(connector): State<Arc<MongoConnector>>) -> Response {
    let mongodb: HealthCheckFuture<'_> = Box::pin(mongodb_ready(&connector));
    run_health_checks(vec![("mongodb", mongodb)]).await
}

/// `/ready`: 200 once MongoDB answers a ping, 503 otherwise
pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state.connector.clone())
}
