//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided query is empty or whitespace-only.
    EmptyQuery,

    /// The provided query exceeds the maximum allowed length.
    QueryTooLong { length: usize, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "No query provided"),
            Self::QueryTooLong { length, max } => {
                write!(f, "Query too long: {} characters (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
