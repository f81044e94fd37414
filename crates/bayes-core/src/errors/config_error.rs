//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coded_string_prefixes_code() {
        let err = ConfigError::ValidationFailed {
            field: "calculator.prior_mean".to_string(),
            message: "must be finite".to_string(),
        };
        assert_eq!(
            err.coded_string(),
            "[CONFIG_ERROR] Config validation failed for calculator.prior_mean: must be finite"
        );
    }
}
