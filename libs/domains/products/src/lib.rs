//! Products Domain
//!
//! Read-only product catalogue backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /categories, /products/{id}, /search
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id/limit parsing rules, ranking, de-duplication
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product document, search hits, response bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{MongoConfig, MongoConnector};
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use std::sync::Arc;
//!
//! let connector = Arc::new(MongoConnector::new(MongoConfig::default()));
//! let repository = MongoProductRepository::new(connector);
//! let service = ProductService::new(repository);
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CategoriesResponse, Product, ProductId, SearchHit, SearchParams, SearchResponse,
    DEFAULT_SEARCH_LIMIT,
};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
