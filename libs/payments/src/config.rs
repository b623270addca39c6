use core_config::env_first;

use crate::error::PaymentError;

/// Environment variables holding the publishable key, in lookup order.
///
/// The `NEXT_PUBLIC_` name is the one the storefront's browser bundle reads, so
/// deployments that only set that one keep working.
pub const PUBLISHABLE_KEY_VARS: [&str; 2] =
    ["STRIPE_PUBLISHABLE_KEY", "NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentConfig {
    pub publishable_key: String,
}

impl PaymentConfig {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
        }
    }

    /// Read the key from the first non-blank of [`PUBLISHABLE_KEY_VARS`]
    pub fn load() -> Result<Self, PaymentError> {
        env_first(&PUBLISHABLE_KEY_VARS)
            .map(Self::new)
            .ok_or(PaymentError::MissingPublishableKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_prefers_server_key() {
        temp_env::with_vars(
            [
                ("STRIPE_PUBLISHABLE_KEY", Some("pk_test_server")),
                ("NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY", Some("pk_test_browser")),
            ],
            || {
                let config = PaymentConfig::load().unwrap();
                assert_eq!(config.publishable_key, "pk_test_server");
            },
        );
    }

    #[test]
    fn test_load_falls_back_to_public_key() {
        temp_env::with_vars(
            [
                ("STRIPE_PUBLISHABLE_KEY", None),
                ("NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY", Some("pk_test_browser")),
            ],
            || {
                let config = PaymentConfig::load().unwrap();
                assert_eq!(config.publishable_key, "pk_test_browser");
            },
        );
    }

    #[test]
    fn test_missing_key() {
        temp_env::with_vars(
            [
                ("STRIPE_PUBLISHABLE_KEY", Some("  ")),
                ("NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY", None),
            ],
            || {
                assert!(matches!(
                    PaymentConfig::load(),
                    Err(PaymentError::MissingPublishableKey)
                ));
            },
        );
    }
}
