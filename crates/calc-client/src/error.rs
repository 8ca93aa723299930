//! # Client Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ClientError                     Display banner                         │
//! │  ├── Busy                        (input ignored, nothing shown)         │
//! │  ├── Rejected(message)           message from the service               │
//! │  ├── Transport(reason)           "ERROR"                                │
//! │  └── InvalidResponse(reason)     "ERROR"                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use calc_core::display::GENERIC_ERROR;
use calc_core::CoreError;

/// Errors raised while running a calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A calculation is already in flight; input is disabled.
    #[error("A calculation is already in progress")]
    Busy,

    /// The service refused the request with a message.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with something that is not a calculator response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured server URL cannot be used.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Text shown on the display in place of the value.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Rejected(message) if !message.is_empty() => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(error: CoreError) -> Self {
        ClientError::Rejected(error.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::InvalidResponse(error.to_string())
        } else {
            ClientError::Transport(error.to_string())
        }
    }
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let err = ClientError::Rejected("Cannot divide by zero.".to_string());
        assert_eq!(err.display_message(), "Cannot divide by zero.");

        assert_eq!(ClientError::Rejected(String::new()).display_message(), "ERROR");
        assert_eq!(
            ClientError::Transport("connection refused".to_string()).display_message(),
            "ERROR"
        );
    }

    #[test]
    fn test_core_error_becomes_rejection() {
        let err: ClientError = CoreError::NegativeSquareRoot.into();
        assert_eq!(
            err,
            ClientError::Rejected("Cannot take square root of a negative number.".to_string())
        );
    }
}
