//! # Configuration
//!
//! Application configuration loaded once at process start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after construction, so no mutex is needed.
//! There is deliberately no global singleton: the struct is built once
//! and passed by reference into the components that need it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_db::DbConfig;

/// Environment variable naming the database file location.
pub const ENV_DB_PATH: &str = "STOCKROOM_DB_PATH";

/// Environment variable for the low-stock threshold.
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

/// Environment variable for future encryption key material.
pub const ENV_ENCRYPTION_KEY: &str = "STOCKROOM_ENCRYPTION_KEY";

/// Configuration errors raised during startup loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("{var} must be an integer, got '{value}'")]
    InvalidInteger { var: &'static str, value: String },
}

/// Application configuration.
///
/// Not hot-reloaded: changes to the environment after startup have no
/// effect on a constructed `Config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Stock level below which a product counts as low on stock.
    /// Default: 5
    pub low_stock_threshold: i64,

    /// Reserved key material for future encryption features.
    ///
    /// Dead configuration today: no current operation reads or writes
    /// encrypted data. Kept so deployments can set it ahead of time.
    pub encryption_key: Option<String>,
}

impl Default for Config {
    /// Returns defaults suitable for development.
    fn default() -> Self {
        Config {
            database_path: PathBuf::from("stockroom.db"),
            low_stock_threshold: 5,
            encryption_key: None,
        }
    }
}

impl Config {
    /// Loads configuration from `STOCKROOM_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through an arbitrary lookup function.
    ///
    /// `from_env` is this with `std::env::var`; tests inject a map
    /// instead so they don't mutate process-wide environment state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            config.low_stock_threshold =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidInteger {
                        var: ENV_LOW_STOCK_THRESHOLD,
                        value: raw.clone(),
                    })?;
        }

        if let Some(key) = lookup(ENV_ENCRYPTION_KEY) {
            config.encryption_key = Some(key);
        }

        Ok(config)
    }

    /// Derives the database-layer configuration for this config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.database_path, PathBuf::from("stockroom.db"));
        assert_eq!(config.low_stock_threshold, 5);
        assert!(config.encryption_key.is_none());
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = Config::from_lookup(|var| match var {
            ENV_DB_PATH => Some("/data/shop.db".to_string()),
            ENV_LOW_STOCK_THRESHOLD => Some("12".to_string()),
            ENV_ENCRYPTION_KEY => Some("reserved".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/data/shop.db"));
        assert_eq!(config.low_stock_threshold, 12);
        assert_eq!(config.encryption_key.as_deref(), Some("reserved"));
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let result = Config::from_lookup(|var| match var {
            ENV_LOW_STOCK_THRESHOLD => Some("lots".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidInteger { var, .. }) if var == ENV_LOW_STOCK_THRESHOLD
        ));
    }
}
