//! MCP tool handlers for the parks server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::config::Config;
use crate::embedding::Embedder;
use crate::error::SearchError;
use crate::matching::{ParkMatcher, SearchOutcome};
use crate::observability::MetricsTracker;
use crate::repositories::ParkRepository;
use crate::services::{ParkSearchService, ParkSearchServiceImpl};
use crate::tools::AskTools;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// Answer returned when no strategy produced a record for any park.
const NO_MATCH_MESSAGE: &str =
    "No parks found matching your query. Please try rephrasing or providing more details.";

/// The parks MCP server that exposes the ask pipeline as tools.
#[derive(Clone)]
pub struct ParksMcpServer {
    // Services provide business logic
    search_service: Arc<dyn ParkSearchService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ParksMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "parks-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "MCP server for Ohio state park search - answers free-text park queries with \
                 exact phrase, embedding similarity, keyword overlap and fuzzy matching."
                    .into(),
            ),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct AskParksParams {
    /// Free-text query, e.g. "waterfalls in Ohio"
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListParksParams {
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    offset: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Map search errors onto MCP codes; an unusable query is the caller's fault.
fn search_error_to_mcp(e: SearchError) -> McpError {
    let code = match e {
        SearchError::InvalidQuery(_) => ErrorCode::INVALID_PARAMS,
        _ => ErrorCode::INTERNAL_ERROR,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl ParksMcpServer {
    /// Create a new parks MCP server.
    ///
    /// Tools and services are constructed internally from the injected
    /// repository and embedder, with thresholds and cache TTL taken from
    /// the configuration.
    pub fn new(
        park_repo: Arc<dyn ParkRepository>,
        embedder: Arc<dyn Embedder>,
        config: &Config,
    ) -> Self {
        let matcher = ParkMatcher::new(
            embedder.clone(),
            config.embedding_threshold,
            config.fuzzy_threshold,
        );

        let ask_tools = AskTools::new(
            park_repo,
            embedder,
            matcher,
            MetricsTracker::new(),
            config.index_cache_ttl_secs,
        );

        let search_service =
            Arc::new(ParkSearchServiceImpl::new(ask_tools)) as Arc<dyn ParkSearchService>;

        Self {
            search_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Answer a free-text question about the parks dataset.
    #[tool(
        description = "Answer a free-text question about Ohio state parks. Runs exact phrase, embedding similarity, keyword overlap and fuzzy matching strategies over the dataset and returns ranked match records with per-strategy scores."
    )]
    async fn ask_parks(
        &self,
        params: Parameters<AskParksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .search_service
            .ask(params.query.clone(), params.max_results)
            .await
            .map_err(search_error_to_mcp)?;

        let body = match response.outcome {
            SearchOutcome::NoMatches => serde_json::json!({
                "query": params.query,
                "message": NO_MATCH_MESSAGE,
                "results": [],
            }),
            SearchOutcome::Matches(records) => serde_json::json!({
                "query": params.query,
                "result_count": records.len(),
                "results": records,
                "from_cache": response.from_cache,
                "index_size": response.index_size,
            }),
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&body).map_err(to_mcp_error)?,
        )]))
    }

    /// List the loaded parks with pagination.
    #[tool(
        description = "List the parks loaded in the dataset, in dataset order, with name, URL and activities. Supports limit/offset pagination."
    )]
    async fn list_parks(
        &self,
        params: Parameters<ListParksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let listing = self
            .search_service
            .list_parks(params.limit, params.offset)
            .await;

        let json_response = serde_json::to_string_pretty(&listing).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
