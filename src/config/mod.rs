//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_SHERPA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ahp;
mod error;
mod server;
mod storage;

pub use ahp::AhpConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// in-memory development server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Run storage backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Pairwise comparison behavior
    #[serde(default)]
    pub ahp: AhpConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_SHERPA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AHP_SHERPA__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `AHP_SHERPA__AHP__CONFLICT_POLICY=reject` -> `ahp.conflict_policy = reject`
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
                    .prefix("AHP_SHERPA")
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
    use crate::domain::ahp::ConflictPolicy;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "AHP_SHERPA__SERVER__PORT",
        "AHP_SHERPA__SERVER__ENVIRONMENT",
        "AHP_SHERPA__SERVER__REQUEST_TIMEOUT_SECS",
        "AHP_SHERPA__STORAGE__BACKEND",
        "AHP_SHERPA__STORAGE__DATA_DIR",
        "AHP_SHERPA__AHP__CONFLICT_POLICY",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.ahp.conflict_policy, ConflictPolicy::LastWriteWins);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_file_storage_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__STORAGE__BACKEND", "file");
        env::set_var("AHP_SHERPA__STORAGE__DATA_DIR", "/var/lib/ahp");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/ahp"));
    }

    #[test]
    fn test_conflict_policy_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__AHP__CONFLICT_POLICY", "reject");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ahp.conflict_policy, ConflictPolicy::Reject);
    }

    #[test]
    fn test_validate_rejects_bad_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__SERVER__REQUEST_TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
