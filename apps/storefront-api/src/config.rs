//! Configuration for the Storefront API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
///
/// The payment key is not read here; the payment client loads it on first use
/// so the catalogue keeps serving when it is missing.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let app = app_info!();
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("MONGODB_APP_NAME", None),
                ("PORT", Some("8080")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.database(), "shop");
                assert_eq!(config.mongodb.app_name.as_deref(), Some("storefront_api"));
                assert_eq!(config.server.port, 8080);
                assert!(config.environment.is_production());
                assert_eq!(config.app.name, "storefront_api");
            },
        );
    }

    #[test]
    fn test_config_requires_mongodb_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_URI", None),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
