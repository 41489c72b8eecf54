//! Caching utilities for the parks MCP server.
//!
//! Provides the TTL cache that keeps the park search index warm between
//! requests.

pub mod timed_cache;

pub use timed_cache::TimedCache;
