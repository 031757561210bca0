//! Error types for sin

use thiserror::Error;

/// Result type alias for sin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sin operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (missing or invalid required value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A timestamp in the source data could not be parsed
    #[error("Invalid timestamp in {field}: {value:?}: {source}")]
    Timestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The issue source failed; the original error is kept as the source
    #[error("Issue source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Repository reference could not be parsed
    #[error("Invalid repository reference: {0}")]
    Repository(String),
}
