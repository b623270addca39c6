//! Database library providing the MongoDB connector used by the storefront.
//!
//! # Features
//!
//! - `config` - load [`mongodb::MongoConfig`] through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, MongoConnector};
//! use std::sync::Arc;
//!
//! let connector = Arc::new(MongoConnector::new(MongoConfig::with_database(
//!     "mongodb://localhost:27017",
//!     "storefront",
//! )));
//!
//! // The first call dials; concurrent and later calls reuse the same client.
//! let db = connector.database().await?;
//! ```

pub mod mongodb;
