//! Configuration management for the parks MCP server.
//!
//! Loads settings from environment variables, with a `.env` file picked up
//! when present. Loading avoids stdout entirely because MCP uses it for
//! protocol traffic.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Which embedding backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingMode {
    /// Deterministic token-hash embedder, no model download
    Hash,

    /// all-MiniLM-L6-v2 sentence transformer (requires the `fastembed`
    /// cargo feature)
    MiniLm,
}

/// Configuration for the parks MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the enriched parks dataset JSON file
    pub dataset_path: String,

    /// Embedding backend to use (default: hash)
    pub embedding_mode: EmbeddingMode,

    /// Embedding vector dimension for the hash backend (default: 384)
    pub embedding_dimension: usize,

    /// Cosine similarity threshold for embedding matches (default: 0.5)
    pub embedding_threshold: f32,

    /// Partial-ratio threshold for fuzzy matches (default: 80)
    pub fuzzy_threshold: u8,

    /// Park index cache TTL in seconds (default: 300)
    pub index_cache_ttl_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `PARKS_DATASET_PATH`: Dataset file (default:
    ///   "ohio_state_parks_with_google_results.json")
    /// - `PARKS_EMBEDDING_MODE`: "hash" or "minilm" (default: "hash")
    /// - `PARKS_EMBEDDING_DIMENSION`: Hash backend dimension (default: 384)
    /// - `PARKS_EMBEDDING_THRESHOLD`: Similarity cutoff 0.0-1.0 (default: 0.5)
    /// - `PARKS_FUZZY_THRESHOLD`: Partial-ratio cutoff 0-100 (default: 80)
    /// - `PARKS_INDEX_CACHE_TTL_SECS`: Index cache TTL (default: 300)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; never prints to stdout
        let _ = dotenvy::dotenv();

        let dataset_path = env::var("PARKS_DATASET_PATH")
            .unwrap_or_else(|_| "ohio_state_parks_with_google_results.json".to_string());

        if dataset_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PARKS_DATASET_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let embedding_mode = Self::parse_env_embedding_mode("PARKS_EMBEDDING_MODE")?;
        let embedding_dimension = Self::parse_env_usize("PARKS_EMBEDDING_DIMENSION", 384)?;
        let embedding_threshold = Self::parse_env_f32("PARKS_EMBEDDING_THRESHOLD", 0.5)?;
        let fuzzy_threshold = Self::parse_env_u8("PARKS_FUZZY_THRESHOLD", 80)?;
        let index_cache_ttl_secs = Self::parse_env_u64("PARKS_INDEX_CACHE_TTL_SECS", 300)?;

        if embedding_dimension == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PARKS_EMBEDDING_DIMENSION".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&embedding_threshold) {
            return Err(ConfigError::InvalidValue {
                var: "PARKS_EMBEDDING_THRESHOLD".to_string(),
                reason: "Must be between 0.0 and 1.0".to_string(),
            });
        }

        if fuzzy_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "PARKS_FUZZY_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            dataset_path,
            embedding_mode,
            embedding_dimension,
            embedding_threshold,
            fuzzy_threshold,
            index_cache_ttl_secs,
            log_level,
        })
    }

    /// Parse the embedding mode variable, defaulting to hash.
    fn parse_env_embedding_mode(var_name: &str) -> ConfigResult<EmbeddingMode> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "hash" => Ok(EmbeddingMode::Hash),
                "minilm" => Ok(EmbeddingMode::MiniLm),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be 'hash' or 'minilm', got: {}", val),
                }),
            },
            Err(_) => Ok(EmbeddingMode::Hash),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as f32 with a default value.
    fn parse_env_f32(var_name: &str, default: f32) -> ConfigResult<f32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<f32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: "ohio_state_parks_with_google_results.json".to_string(),
            embedding_mode: EmbeddingMode::Hash,
            embedding_dimension: 384,
            embedding_threshold: 0.5,
            fuzzy_threshold: 80,
            index_cache_ttl_secs: 300,
            log_level: "error".to_string(),
        }
    }
}
