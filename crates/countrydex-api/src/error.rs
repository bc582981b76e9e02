//! Error types for the countries API client.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the countries API client.
///
/// An API-level "no match" reply is not an error; it decodes to an empty
/// result set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure issuing the request or reading the body.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Body could not be decoded as a known reply shape.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The API replied with an unexpected status.
    #[error("HTTP error: status {status}")]
    Http { status: u16 },
}

impl ApiError {
    /// Create a new network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error with a message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = ApiError::network("connection refused");
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = ApiError::decode("expected an array");
        assert!(err.to_string().contains("Decode error"));
    }

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http { status: 502 };
        assert!(err.to_string().contains("status 502"));
    }
}
