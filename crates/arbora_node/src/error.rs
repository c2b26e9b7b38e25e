//! Node configuration error types.

use thiserror::Error;

/// Errors that can occur while building or loading a [`FieldNames`](crate::FieldNames).
///
/// Tree operations never return these: a miss is `None`, `false` or an empty
/// collection.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NodeError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
