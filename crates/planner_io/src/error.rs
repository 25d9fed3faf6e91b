//! Error types for planner_io crate.
//!
//! Provides structured error handling for catalog loading, settings loading
//! and the board export format.

use thiserror::Error;

/// Main error type for planner_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Board export string could not be decoded
    #[error("Codec error: {0}")]
    Codec(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for planner_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new serialization error.
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a new codec error.
    #[must_use]
    pub fn codec<S: Into<String>>(msg: S) -> Self {
        Self::Codec(msg.into())
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
