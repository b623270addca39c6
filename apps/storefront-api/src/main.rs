//! Storefront API - product catalogue and payment configuration over REST

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);

    // Best-effort warm-up: requests connect on demand if MongoDB is not up yet.
    match state.connector.client().await {
        Ok(_) => {
            if let Err(e) = api::init_indexes(&state).await {
                warn!(error = %e, "Failed to create product indexes");
            }
        }
        Err(e) => warn!(error = %e, "MongoDB not reachable at startup; connecting on first request"),
    }

    if let Err(e) = state.payments.get() {
        warn!(error = %e, "Payment client unavailable");
    }

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &state.config.server)?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(&state));

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        database = state.config.mongodb.database(),
        "Starting storefront API"
    );

    let connector = state.connector.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move { connector.shutdown().await },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {e}"))?;

    info!("Storefront API shutdown complete");
    Ok(())
}
