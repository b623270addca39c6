//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Read-only product catalogue and payment configuration for the storefront",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_products::ApiDoc),
        (path = "/api", api = payments::ApiDoc)
    )
)]
pub struct ApiDoc;
