//! Error types for the quickdock engine.
//!
//! Every operation returns a structured result; none of these errors is
//! fatal to the process. The engine never logs at user level or renders
//! UI itself — the embedding host decides how to surface each case.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dock operations.
#[derive(Debug, Error)]
pub enum DockError {
    // List invariant violations
    #[error("shortcut limit reached ({limit} targets)")]
    LimitReached { limit: usize },

    #[error("target already present: {0}")]
    AlreadyPresent(String),

    #[error("target not found: {0}")]
    NotFound(String),

    #[error("target list has not been loaded")]
    NotLoaded,

    #[error("invalid target identifier: {reason}")]
    InvalidTarget { reason: String },

    // Store errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("settings document error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for dock operations.
pub type Result<T> = std::result::Result<T, DockError>;

impl From<std::io::Error> for DockError {
    fn from(err: std::io::Error) -> Self {
        DockError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for DockError {
    fn from(err: serde_json::Error) -> Self {
        DockError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl DockError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DockError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Check if this error originated in the backing store rather than a
    /// list invariant.
    ///
    /// Hosts typically retry or report store failures, while invariant
    /// violations (`LimitReached`, `AlreadyPresent`, ...) are user
    /// feedback.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, DockError::Io { .. } | DockError::Json { .. })
    }
}
