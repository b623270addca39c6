//! # Axum Helpers
//!
//! Shared plumbing for the storefront's Axum services.
//!
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: the `{ "error": ... }` response contract

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
    HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorResponse};
