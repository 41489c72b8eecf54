//! SearchQuery value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum accepted query length in characters.
pub const MAX_QUERY_LENGTH: usize = 500;

/// A type-safe wrapper for caller-supplied search queries.
///
/// Construction trims surrounding whitespace and rejects empty or
/// over-long input, so an accepted query is always usable by the
/// matching pipeline.
///
/// # Example
///
/// ```
/// use parks_mcp_server::domain::SearchQuery;
///
/// let query = SearchQuery::new("waterfalls in Ohio").unwrap();
/// assert_eq!(query.as_str(), "waterfalls in Ohio");
/// assert!(SearchQuery::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Create a new SearchQuery, trimming whitespace and validating length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyQuery` for empty or whitespace-only
    /// input, and `ValidationError::QueryTooLong` past [`MAX_QUERY_LENGTH`].
    pub fn new(query: impl Into<String>) -> Result<Self, ValidationError> {
        let query = query.into().trim().to_string();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        if query.chars().count() > MAX_QUERY_LENGTH {
            return Err(ValidationError::QueryTooLong {
                length: query.chars().count(),
                max: MAX_QUERY_LENGTH,
            });
        }
        Ok(Self(query))
    }

    /// Get the query as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for SearchQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for SearchQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SearchQuery::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
