//! Error types for the countrydex core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration validation error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CoreError::config("page_size must be at least 1");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("page_size"));
    }
}
