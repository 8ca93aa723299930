//! Client configuration.
//!
//! Loaded from environment variables with fallback to defaults:
//! - `CALC_SERVER_URL` - arithmetic service base URL (default: `http://127.0.0.1:3000`)
//! - `CALC_ERROR_DISPLAY_MS` - how long an error stays on the display (default: 2000)
//! - `CALC_HISTORY_CAPACITY` - history entries kept (default and maximum: 10)
//! - `CALC_REQUEST_TIMEOUT_MS` - optional request timeout (default: none)

use std::env;
use std::time::Duration;

use calc_core::MAX_HISTORY_ENTRIES;
use serde::{Deserialize, Serialize};

/// Default service location, matching the server's default port.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// How long an error message replaces the display value.
pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_secs(2);

/// Calculator client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the arithmetic service.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// How long an error stays on the display.
    #[serde(default = "default_error_display")]
    pub error_display: Duration,

    /// Maximum number of history entries; values above 10 are capped.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Request timeout; `None` leaves it to the network layer.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_error_display() -> Duration {
    DEFAULT_ERROR_DISPLAY
}

fn default_history_capacity() -> usize {
    MAX_HISTORY_ENTRIES
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: default_server_url(),
            error_display: default_error_display(),
            history_capacity: default_history_capacity(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();

        if let Ok(url) = env::var("CALC_SERVER_URL") {
            config.server_url = url;
        }

        if let Some(ms) = parse_var::<u64>("CALC_ERROR_DISPLAY_MS")? {
            config.error_display = Duration::from_millis(ms);
        }

        if let Some(capacity) = parse_var::<usize>("CALC_HISTORY_CAPACITY")? {
            config.history_capacity = capacity;
        }

        if let Some(ms) = parse_var::<u64>("CALC_REQUEST_TIMEOUT_MS")? {
            config.request_timeout = Some(Duration::from_millis(ms));
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(None),
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

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "http://127.0.0.1:3000");
        assert_eq!(config.error_display, Duration::from_secs(2));
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"server_url": "http://calc.local"}"#).unwrap();
        assert_eq!(config.server_url, "http://calc.local");
        assert_eq!(config.history_capacity, 10);
    }
}
