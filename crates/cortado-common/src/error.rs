//! Error types shared across the Cortado workspace

use thiserror::Error;

/// Marker trait implemented by all Cortado error types
pub trait CortadoError: std::error::Error + Send + Sync {}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {details}")]
    FileError { path: String, details: String },

    /// Configuration data could not be parsed or serialized
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Configuration value rejected by validation
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    /// Environment variable was set to an unusable value
    #[error("Environment variable {var}: {details}")]
    EnvError { var: String, details: String },
}

impl CortadoError for ConfigurationError {}

impl ConfigurationError {
    /// Get error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigurationError::FileError { .. } => "CORTADO_CONFIG_FILE_ERROR",
            ConfigurationError::ParseError { .. } => "CORTADO_CONFIG_PARSE_ERROR",
            ConfigurationError::InvalidConfig { .. } => "CORTADO_CONFIG_INVALID",
            ConfigurationError::EnvError { .. } => "CORTADO_CONFIG_ENV_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ConfigurationError::ParseError {
            details: "bad toml".to_string(),
        };
        assert_eq!(err.error_code(), "CORTADO_CONFIG_PARSE_ERROR");

        let err = ConfigurationError::InvalidConfig {
            details: "empty field".to_string(),
        };
        assert_eq!(err.error_code(), "CORTADO_CONFIG_INVALID");
    }

    #[test]
    fn test_display_includes_details() {
        let err = ConfigurationError::EnvError {
            var: "CORTADO_PROFILE".to_string(),
            details: "unrecognized profile".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("CORTADO_PROFILE"));
        assert!(rendered.contains("unrecognized profile"));
    }
}
