//! Parks MCP Server - a Model Context Protocol server answering free-text
//! questions about Ohio state parks.
//!
//! The pipeline runs four non-exclusive matching strategies over an
//! enriched parks dataset: exact phrase, embedding similarity, keyword
//! overlap and fuzzy matching. Records are ranked by embedding similarity
//! and served over MCP stdio.
//!
//! # Architecture
//!
//! - **models**: Park records as the crawler/enricher produced them
//! - **text**: Query and park text normalization, phrases, lemmas
//! - **embedding**: Embedding backends behind the `Embedder` trait
//! - **matching**: The four strategies, the park index, ranking
//! - **repositories**: Dataset loading from JSON
//! - **cache**: TTL cache for the built index
//! - **services**: Business logic and query validation
//! - **tools**: Pipeline orchestration behind the MCP tools
//! - **server**: MCP protocol server
//! - **observability**: Query and cache counters

// Re-export commonly used types
pub mod cache;
pub mod config;
pub mod domain;
pub mod embedding;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;
pub mod text;
pub mod tools;

pub use cache::TimedCache;
pub use config::{Config, EmbeddingMode};
pub use domain::{SearchQuery, ValidationError};
pub use embedding::{Embedder, HashEmbedder};
pub use error::{ConfigError, EmbeddingError, ParkDataError, SearchError};
pub use matching::{MatchMethod, ParkIndex, ParkMatch, ParkMatcher, SearchOutcome};
pub use models::{GoogleResult, Park, ParkRef};
pub use repositories::{JsonParkRepository, ParkRepository};
pub use server::ParksMcpServer;
pub use text::AnalyzedText;
pub use tools::{AskResponse, AskTools, ListParksResponse, ParkSummary};
