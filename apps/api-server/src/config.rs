//! Application configuration loaded from environment variables.

use std::env;
#[cfg(feature = "mongodb")]
use std::time::Duration;

#[cfg(feature = "mongodb")]
use quill_infra::database::DatabaseConfig;

const DEFAULT_PORT: u16 = 4000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `MONGODB_URI` is unset.
    #[cfg(feature = "mongodb")]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        #[cfg(feature = "mongodb")]
        let database = var("MONGODB_URI")
            .filter(|uri| !uri.is_empty())
            .map(|uri| DatabaseConfig {
                uri,
                database_name: var("MONGODB_DATABASE"),
                max_pool_size: var("MONGODB_MAX_POOL_SIZE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_pool_size: var("MONGODB_MIN_POOL_SIZE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
                connect_timeout: Duration::from_secs(
                    var("MONGODB_CONNECT_TIMEOUT_SECS")
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(10),
                ),
            });

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            #[cfg(feature = "mongodb")]
            database,
        }
    }
}
