//! Error types for graph serialization and configuration.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while writing a [`Subgraph`](super::Subgraph).
#[derive(Debug)]
pub enum RdfError {
    /// The serializer failed or produced invalid output.
    Serialization(String),
    /// A namespace prefix could not be registered.
    InvalidPrefix { prefix: String, reason: String },
}

impl fmt::Display for RdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            RdfError::InvalidPrefix { prefix, reason } => {
                write!(f, "Invalid prefix `{}`: {}", prefix, reason)
            }
        }
    }
}

impl std::error::Error for RdfError {}

impl From<std::io::Error> for RdfError {
    fn from(e: std::io::Error) -> Self {
        RdfError::Serialization(e.to_string())
    }
}

/// Errors raised while loading a [`MappingConfig`](super::MappingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{field}` must not be empty")]
    EmptyField { field: &'static str },
}
