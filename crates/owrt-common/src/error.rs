//! Error types and utilities for OWRT Bot

use thiserror::Error;

/// Result type alias for OWRT Bot operations
pub type Result<T> = std::result::Result<T, OwrtError>;

/// Main error type for OWRT Bot operations
#[derive(Error, Debug)]
pub enum OwrtError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Environment variable the error refers to, if any
        variable: Option<String>,
    },

    /// Logging setup errors
    #[error("Logging error: {message}")]
    Logging {
        /// Human readable description
        message: String,
        /// Underlying subscriber error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl OwrtError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            variable: None,
        }
    }

    /// Create a new configuration error pointing at an environment variable
    pub fn config_var(variable: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            variable: Some(variable.into()),
        }
    }

    /// Create a new logging error with source
    pub fn logging_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Logging {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Environment variable this error refers to, if any
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::Config { variable, .. } => variable.as_deref(),
            Self::Logging { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = OwrtError::config_var("TELEGRAM_TOKEN", "bot token is not set");
        assert_eq!(err.to_string(), "Configuration error: bot token is not set");
        assert_eq!(err.variable(), Some("TELEGRAM_TOKEN"));
    }

    #[test]
    fn test_logging_error_keeps_source() {
        use std::error::Error as _;

        let source = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "subscriber set");
        let err = OwrtError::logging_with_source("failed to install subscriber", source);
        assert_eq!(err.to_string(), "Logging error: failed to install subscriber");
        assert!(err.source().is_some());
        assert_eq!(err.variable(), None);
    }
}
