//! Error types for the ResourceManager client.

use thiserror::Error;

/// Errors returned by client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection parameters (hostname/port) are missing or unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied value is outside the legal set for its parameter.
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// The service responded with a status outside the accepted {200, 202} set.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the service.
        code: u16,
        message: String,
    },

    /// Transport-level failure (connection refused, DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Create an API error for a rejected response status.
    pub fn api_error(code: u16) -> Self {
        Self::Api {
            code,
            message: format!("Response finished with status: {code}"),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status() {
        let err = ClientError::api_error(404);
        assert_eq!(err.to_string(), "Response finished with status: 404");
        assert!(matches!(err, ClientError::Api { code: 404, .. }));
    }

    #[test]
    fn illegal_argument_display() {
        let err = ClientError::IllegalArgument("state BOGUS is illegal".to_string());
        assert_eq!(err.to_string(), "Illegal argument: state BOGUS is illegal");
    }
}
