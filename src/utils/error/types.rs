//! Error types for homeserve

use thiserror::Error;

/// Result type alias for homeserve
pub type Result<T> = std::result::Result<T, HomeserveError>;

/// Main error type for homeserve
#[derive(Error, Debug)]
pub enum HomeserveError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
