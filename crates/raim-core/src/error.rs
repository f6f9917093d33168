//! Error handling for RAIM
//!
//! Provides a unified error type and result type for use across all RAIM
//! components.

/// Result type alias for RAIM operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for RAIM
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Hardware label parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration parsing errors
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Check if this error indicates a problem with the caller's input
    /// rather than a fault in RAIM itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::InvalidConfiguration(_) | Error::NotFound(_)
        )
    }

    /// Get the error category for metrics/logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Parse(_) => "parse",
            Error::InvalidConfiguration(_) => "configuration",
            Error::NotFound(_) => "not_found",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Yaml(_) => "yaml",
            Error::Config(_) => "config",
            Error::Other(_) => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::parse("bad label");
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: bad label");

        let err = Error::config("empty hardware set");
        assert_eq!(err.to_string(), "Configuration error: empty hardware set");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(Error::parse("test").category(), "parse");
        assert_eq!(Error::config("test").category(), "configuration");
        assert_eq!(Error::not_found("test").category(), "not_found");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::parse("test").is_client_error());
        assert!(Error::config("test").is_client_error());

        let io_err = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!io_err.is_client_error());
    }
}
