//! Error handling module for the loxc driver.
//!
//! Lexical errors are not listed here. They are diagnostics that end up in
//! the exit status; these are the failures that stop the driver itself.

use thiserror::Error;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
        assert_eq!(err.to_string(), "IO error");
    }

    #[test]
    fn test_io_cause_is_reported_once() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = anyhow::Error::from(DriverError::from(io_err)).context("cannot tokenize a.lox");
        assert_eq!(
            format!("{:#}", err),
            "cannot tokenize a.lox: IO error: file not found"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DriverError = json_err.into();
        assert!(matches!(err, DriverError::Json(_)));
        assert_eq!(err.to_string(), "JSON error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
