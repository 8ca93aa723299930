//! # HTTP Backend
//!
//! Runs calculations against the arithmetic service over `GET /arithmetic`.
//!
//! ## Response Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  status   body                    outcome                               │
//! │  ──────   ──────────────────────  ───────────────────────────────────   │
//! │  2xx      {"result": n}           Ok(n)                                 │
//! │  any      {"error": "..."}        Rejected("...")                       │
//! │  any      anything else           InvalidResponse  (display "ERROR")    │
//! │  -        connection failure      Transport        (display "ERROR")    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No timeout is applied unless one is configured; a hung request ends when
//! the connection does.

use std::time::Duration;

use async_trait::async_trait;
use calc_core::{ArithmeticQuery, ArithmeticResponse};
use tracing::{debug, warn};
use url::Url;

use crate::backend::ArithmeticBackend;
use crate::error::{ClientError, ClientResult};

/// Path of the arithmetic endpoint, relative to the server URL.
pub const ARITHMETIC_PATH: &str = "arithmetic";

/// Backend talking to a remote arithmetic service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Creates a backend for the service at `server_url`.
    ///
    /// ## Example
    /// ```rust
    /// use calc_client::HttpBackend;
    ///
    /// let backend = HttpBackend::new("http://127.0.0.1:3000", None).unwrap();
    /// assert_eq!(backend.endpoint().as_str(), "http://127.0.0.1:3000/arithmetic");
    /// ```
    pub fn new(server_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Self::with_client(client, server_url)
    }

    /// Creates a backend reusing an existing `reqwest` client.
    pub fn with_client(client: reqwest::Client, server_url: &str) -> ClientResult<Self> {
        let endpoint = arithmetic_endpoint(server_url)?;
        Ok(HttpBackend { client, endpoint })
    }

    /// Full URL of the arithmetic endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn arithmetic_endpoint(server_url: &str) -> ClientResult<Url> {
    let mut base =
        Url::parse(server_url).map_err(|e| ClientError::InvalidUrl(format!("{server_url}: {e}")))?;

    if base.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(server_url.to_string()));
    }

    // Url::join replaces the last segment unless the path ends with '/'.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(ARITHMETIC_PATH)
        .map_err(|e| ClientError::InvalidUrl(format!("{server_url}: {e}")))
}

#[async_trait]
impl ArithmeticBackend for HttpBackend {
    async fn calculate(&self, query: &ArithmeticQuery) -> ClientResult<f64> {
        debug!(endpoint = %self.endpoint, operation = ?query.operation, "Sending calculation");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ArithmeticResponse>(&body) {
            Ok(ArithmeticResponse::Success { result }) if status.is_success() => Ok(result.0),
            Ok(ArithmeticResponse::Failure { error }) => {
                debug!(%status, %error, "Calculation rejected");
                Err(ClientError::Rejected(error))
            }
            Ok(ArithmeticResponse::Success { .. }) => Err(ClientError::InvalidResponse(format!(
                "HTTP {status} with a result body"
            ))),
            Err(e) => {
                warn!(%status, error = %e, "Unreadable calculator response");
                Err(ClientError::InvalidResponse(format!("HTTP {status}: {e}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_root() {
        let backend = HttpBackend::new("http://localhost:3000/", None).unwrap();
        assert_eq!(backend.endpoint().as_str(), "http://localhost:3000/arithmetic");
    }

    #[test]
    fn test_endpoint_keeps_prefix() {
        let backend = HttpBackend::new("http://example.com/calc", None).unwrap();
        assert_eq!(backend.endpoint().as_str(), "http://example.com/calc/arithmetic");
    }

    #[test]
    fn test_invalid_url() {
        let err = HttpBackend::new("not a url", None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));

        let err = HttpBackend::new("mailto:someone@example.com", None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let backend = HttpBackend::new("http://127.0.0.1:9", None).unwrap();
        let err = backend
            .calculate(&ArithmeticQuery::binary("add", "1", "2"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.display_message(), "ERROR");
    }
}
