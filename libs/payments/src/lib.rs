//! Payment provider client for the storefront.
//!
//! The client is created on first use from a publishable key and memoized by
//! [`PaymentClientProvider`]:
//!
//! ```rust,no_run
//! use payments::PaymentClientProvider;
//!
//! let provider = PaymentClientProvider::from_env();
//! let client = provider.get()?;
//! println!("{}", client.publishable_key());
//! # Ok::<(), payments::PaymentError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;

pub use client::{PaymentClient, PaymentClientProvider};
pub use config::PaymentConfig;
pub use error::PaymentError;
pub use handlers::ApiDoc;
