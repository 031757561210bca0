//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error (auth, not found, rate limit, transport), passed
    /// through from octocrab as-is
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Configuration, credentials or repository reference problem
    #[error(transparent)]
    Config(#[from] sin_core::Error),

    /// Could not build the HTTP client
    #[error("Failed to create GitHub client: {0}")]
    Client(String),

    /// A response field could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<Error> for sin_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Config(inner) => inner,
            other => sin_core::Error::Source(Box::new(other)),
        }
    }
}
