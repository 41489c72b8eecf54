//! Parks MCP Server - Main entry point
//!
//! This is the main executable for the Parks MCP Server, which answers
//! free-text questions about Ohio state parks over the Model Context
//! Protocol (MCP).

use anyhow::{Context, Result};
use parks_mcp_server::embedding::{Embedder, HashEmbedder};
use parks_mcp_server::repositories::{JsonParkRepository, ParkRepository};
use parks_mcp_server::{Config, EmbeddingMode, ParksMcpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so the log filter can honor LOG_LEVEL
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!(
        "Starting Parks MCP Server with dataset: {}",
        config.dataset_path
    );

    // Initialize the embedding backend
    let embedder = build_embedder(&config)?;
    info!("Embedding backend: {}", embedder.id());

    // Initialize the dataset repository
    let park_repo =
        Arc::new(JsonParkRepository::new(&config.dataset_path)) as Arc<dyn ParkRepository>;

    // Create the MCP server (tools and services are constructed internally)
    let server = ParksMcpServer::new(park_repo, embedder, &config);

    info!("Parks MCP Server initialized");
    info!("Index cache TTL: {} seconds", config.index_cache_ttl_secs);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    parks_mcp_server::server::run_server(server).await?;

    info!("Parks MCP Server shutdown complete");
    Ok(())
}

/// Construct the embedding backend named by the configuration.
fn build_embedder(config: &Config) -> Result<Arc<dyn Embedder>> {
    match config.embedding_mode {
        EmbeddingMode::Hash => Ok(Arc::new(HashEmbedder::new(config.embedding_dimension))),
        #[cfg(feature = "fastembed")]
        EmbeddingMode::MiniLm => {
            let embedder = parks_mcp_server::embedding::MiniLmEmbedder::new()
                .context("Failed to load the MiniLM embedding model")?;
            Ok(Arc::new(embedder))
        }
        #[cfg(not(feature = "fastembed"))]
        EmbeddingMode::MiniLm => anyhow::bail!(
            "PARKS_EMBEDDING_MODE=minilm requires building with the `fastembed` feature"
        ),
    }
}
