//! Error types for the Parks MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Request-time failures are never fatal: dataset load errors degrade to an empty
//! collection, and per-candidate embedding failures are logged and skipped.

use thiserror::Error;

/// Errors that can occur while loading the park dataset.
#[derive(Error, Debug)]
pub enum ParkDataError {
    /// Dataset file could not be read
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON
    #[error("Failed to parse dataset file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic dataset error with context
    #[error("Dataset error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur while computing text embeddings.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// The embedding backend failed
    #[error("Embedding backend '{backend}' failed: {reason}")]
    Backend { backend: String, reason: String },

    /// The backend produced a vector of the wrong size
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Generic embedding error
    #[error("Embedding error: {0}")]
    Other(String),
}

/// Errors that can occur while answering a search query.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The caller supplied an unusable query (reported immediately, no scan runs)
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Embedding failure that could not be isolated to a single candidate
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    /// Generic search error
    #[error("Search error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ParkDataError
pub type ParkDataResult<T> = Result<T, ParkDataError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with EmbeddingError
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParkDataError::Other("truncated file".to_string());
        assert_eq!(err.to_string(), "Dataset error: truncated file");

        let err = ConfigError::MissingVar("PARKS_DATASET_PATH".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: PARKS_DATASET_PATH"
        );

        let err = SearchError::InvalidQuery("No query provided".to_string());
        assert_eq!(err.to_string(), "Invalid search query: No query provided");
    }

    #[test]
    fn test_embedding_error_variants() {
        let err = EmbeddingError::DimensionMismatch {
            expected: 384,
            actual: 0,
        };
        assert!(err.to_string().contains("384"));

        let err = EmbeddingError::Backend {
            backend: "minilm".to_string(),
            reason: "model not loaded".to_string(),
        };
        assert!(err.to_string().contains("minilm"));
        assert!(err.to_string().contains("model not loaded"));
    }

    #[test]
    fn test_embedding_error_converts_to_search_error() {
        let err: SearchError = EmbeddingError::Other("backend gone".to_string()).into();
        assert!(matches!(err, SearchError::Embedding(_)));
    }
}
