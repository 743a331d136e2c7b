//! HTTP listener configuration: bind address, request timeout, log filter
//! and CORS origins.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Settings read by `main` and the router.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind; rejected at load time when not an IP address.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Selects the log format: JSON lines in production.
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins. Unset or blank means any origin.
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Non-empty origins from `cors_origins`. Empty when every origin is allowed.
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.cors_origins
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Builds the tracing filter from `log_level`.
    pub fn log_filter(&self) -> Result<EnvFilter, ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel(self.log_level.clone()));
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ValidationError::InvalidLogLevel(self.log_level.clone()))
    }

    /// # Errors
    ///
    /// - `InvalidPort` for port 0
    /// - `InvalidTimeout` outside `1..=MAX_REQUEST_TIMEOUT_SECS`
    /// - `InvalidLogLevel` for a filter `EnvFilter` cannot parse
    /// - `InvalidCorsOrigin` for an origin without an http(s) scheme
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.log_filter()?;
        if let Some(origin) = self
            .allowed_origins()
            .into_iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(ValidationError::InvalidCorsOrigin(origin.to_string()));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,ahp_sherpa=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(origins: &str) -> ServerConfig {
        ServerConfig {
            cors_origins: Some(origins.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_bind_all_interfaces_and_validate() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.is_production());
        assert!(config.allowed_origins().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn socket_addr_uses_host_and_port() {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn origins_are_trimmed_and_split() {
        let config = with_origins("http://localhost:5173, https://ahp.example.com");
        assert_eq!(
            config.allowed_origins(),
            vec!["http://localhost:5173", "https://ahp.example.com"]
        );
    }

    #[test]
    fn blank_origins_mean_any_origin() {
        assert!(with_origins("").allowed_origins().is_empty());
        assert!(with_origins(" , ,").allowed_origins().is_empty());
        assert_eq!(
            with_origins("http://a.test,,").allowed_origins(),
            vec!["http://a.test"]
        );
        assert!(with_origins("").validate().is_ok());
    }

    #[test]
    fn origin_without_scheme_is_rejected() {
        assert_eq!(
            with_origins("http://a.test, b.test").validate(),
            Err(ValidationError::InvalidCorsOrigin("b.test".to_string()))
        );
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn timeout_must_be_within_range() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
    }

    #[test]
    fn unparseable_log_filter_is_rejected() {
        for level in ["  ", "ahp_sherpa=loud"] {
            let config = ServerConfig {
                log_level: level.to_string(),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidLogLevel(_))
            ));
        }
    }
}
