//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AUTOMATION_JOURNEY` prefix and nested values use double underscores as separators.
//! Every setting has a default, so the service starts with no environment at all.
//!
//! # Example
//!
//! ```no_run
//! use automation_journey::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod catalog;
mod crm;
mod error;
mod features;
mod server;
mod storage;

pub use catalog::CatalogConfig;
pub use crm::CrmConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, public URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// Offering catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Journey snapshot storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// CRM webhook
    #[serde(default)]
    pub crm: CrmConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AUTOMATION_JOURNEY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AUTOMATION_JOURNEY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AUTOMATION_JOURNEY__CRM__WEBHOOK_URL=...` -> `crm.webhook_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AUTOMATION_JOURNEY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.crm.validate()?;
        // CRM calls must finish inside the request timeout
        if self.crm.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::CrmTimeoutExceedsRequestTimeout {
                crm_secs: self.crm.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "AUTOMATION_JOURNEY__SERVER__PORT",
        "AUTOMATION_JOURNEY__SERVER__ENVIRONMENT",
        "AUTOMATION_JOURNEY__STORAGE__DEBOUNCE_MS",
        "AUTOMATION_JOURNEY__CRM__WEBHOOK_URL",
        "AUTOMATION_JOURNEY__FEATURES__ENABLE_PERSISTENCE",
        "AUTOMATION_JOURNEY__CATALOG__PATH",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.debounce_ms, 500);
        assert!(config.crm.webhook_url.is_none());
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUTOMATION_JOURNEY__SERVER__PORT", "3000");
        env::set_var("AUTOMATION_JOURNEY__STORAGE__DEBOUNCE_MS", "250");
        env::set_var("AUTOMATION_JOURNEY__CRM__WEBHOOK_URL", "https://hooks.example.com/abc");
        env::set_var("AUTOMATION_JOURNEY__FEATURES__ENABLE_PERSISTENCE", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.debounce_ms, 250);
        assert!(config.crm.webhook().is_some());
        assert!(!config.features.enable_persistence);
        assert!(config.features.enable_crm);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUTOMATION_JOURNEY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_bad_debounce() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUTOMATION_JOURNEY__STORAGE__DEBOUNCE_MS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidDebounce));
    }

    #[test]
    fn test_validate_rejects_crm_timeout_past_request_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 10;
        config.crm.timeout_secs = 10;

        assert_eq!(
            config.validate(),
            Err(ValidationError::CrmTimeoutExceedsRequestTimeout {
                crm_secs: 10,
                request_secs: 10,
            })
        );

        config.crm.timeout_secs = 9;
        assert!(config.validate().is_ok());
    }
}
