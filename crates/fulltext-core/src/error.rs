//! Error types for full-text search support.
//!
//! Every error here is a precondition violation or an IO failure during
//! migration-script emission; nothing is retried or recovered.

use std::path::PathBuf;
use thiserror::Error;

use crate::dialect::Dialect;

/// Main error type for full-text operations.
#[derive(Debug, Error)]
pub enum FulltextError {
    // Capability errors
    #[error("Model {model}: no full-text columns defined")]
    MissingColumns { model: String },

    #[error("Model {model}: no table name defined")]
    MissingTableName { model: String },

    #[error("{model} is not full-text searchable")]
    NotFullTextable { model: String },

    // Compiler errors
    #[error("No full-text compiler for dialect: {dialect}")]
    UnsupportedDialect { dialect: Dialect },

    // Registry errors
    #[error("Registry error: {message}")]
    Registry { message: String },

    // Migration file errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for full-text operations.
pub type Result<T> = std::result::Result<T, FulltextError>;

// Conversion implementations for common error types

impl From<std::io::Error> for FulltextError {
    fn from(err: std::io::Error) -> Self {
        FulltextError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for FulltextError {
    fn from(err: serde_json::Error) -> Self {
        FulltextError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl FulltextError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        FulltextError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FulltextError::MissingColumns {
            model: "Article".into(),
        };
        assert_eq!(err.to_string(), "Model Article: no full-text columns defined");
    }

    #[test]
    fn test_not_fulltextable_display() {
        let err = FulltextError::NotFullTextable {
            model: "Comment".into(),
        };
        assert_eq!(err.to_string(), "Comment is not full-text searchable");
    }

    #[test]
    fn test_unsupported_dialect_display() {
        let err = FulltextError::UnsupportedDialect {
            dialect: Dialect::Postgres,
        };
        assert_eq!(err.to_string(), "No full-text compiler for dialect: postgres");
    }
}
