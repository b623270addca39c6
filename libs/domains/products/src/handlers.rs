//! HTTP handlers for the storefront catalogue

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CategoriesResponse, Product, ProductId, SearchHit, SearchParams, SearchResponse,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the catalogue endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, get_product, search_products),
    components(
        schemas(Product, SearchHit, CategoriesResponse, SearchResponse),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Catalogue", description = "Read-only product catalogue")
    )
)]
pub struct ApiDoc;

/// Create the catalogue router; mount it under `/api`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/categories", get(list_categories))
        .route("/products/{id}", get(get_product))
        .route("/search", get(search_products))
        .with_state(shared_service)
}

/// List every distinct product category
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalogue",
    responses(
        (status = 200, description = "Distinct categories", body = CategoriesResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<CategoriesResponse>> {
    let categories = service.list_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// Get a product by its numeric id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Catalogue",
    params(
        ("id" = String, Path, description = "Numeric product id; trailing non-digits are ignored")
    ),
    responses(
        (status = 200, description = "Product document", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(ProductId::parse(&id)).await?;
    Ok(Json(product))
}

/// Full-text product search ranked by relevance
#[utoipa::path(
    get,
    path = "/search",
    tag = "Catalogue",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products, best first", body = SearchResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<SearchParams>,
) -> ProductResult<Json<SearchResponse>> {
    let products = service.search(&params).await?;
    Ok(Json(SearchResponse { products }))
}
