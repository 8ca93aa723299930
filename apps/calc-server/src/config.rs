//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address (all interfaces).
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Arithmetic service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP port
    pub port: u16,

    /// Interface to listen on
    pub bind_addr: IpAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::from([0, 0, 0, 0]),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServerConfig {
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            bind_addr: lookup("CALC_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CALC_BIND_ADDR".to_string()))?,
        };

        Ok(config)
    }

    /// Socket address to bind.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[("PORT", "8080"), ("CALC_BIND_ADDR", "127.0.0.1")]).unwrap();
        assert_eq!(config.bind_address().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port() {
        let err = load_from(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");

        let err = load_from(&[("PORT", "70000")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = load_from(&[("CALC_BIND_ADDR", "localhost")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CALC_BIND_ADDR");
    }
}
