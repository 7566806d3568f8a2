//! Error types for the menu pipeline.

use thiserror::Error;

/// Failures of the remote menu request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// No response within the configured window
    #[error("Request timeout after {after_ms} ms - please try again")]
    Timeout { after_ms: u64 },
    /// DNS, connection refused, aborted request or unreadable body
    #[error("Network error: {message}")]
    Network { message: String },
    /// Endpoint answered with a non-success status
    #[error("API Error {status}: {message}")]
    Api { status: u16, message: String },
}

/// The response did not contain any recognizable menu items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("no menu items found")]
    NoMenuItems,
}

/// Invalid static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Category ID is required")]
    MissingCategory,
}

/// Everything that sends the menu page to the static fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network {
            message: err.to_string(),
        }
    }
}

impl From<LoadError> for String {
    fn from(err: LoadError) -> String {
        err.to_string()
    }
}
