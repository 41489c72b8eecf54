//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! search queries. These value objects provide validation at construction
//! time and prevent invalid data from being represented in the system.

pub mod errors;
pub mod query;

pub use errors::ValidationError;
pub use query::{SearchQuery, MAX_QUERY_LENGTH};
