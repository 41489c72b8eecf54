//! Park search service layer.
//!
//! Business logic for the ask pipeline: query validation at the domain
//! boundary, then delegation to the tools layer.

use crate::domain::SearchQuery;
use crate::error::{SearchError, SearchResult};
use crate::tools::{AskResponse, AskTools, ListParksResponse};
use async_trait::async_trait;

/// Default page size for park listings.
const DEFAULT_LIST_LIMIT: usize = 25;

/// Park search service trait for business operations.
#[async_trait]
pub trait ParkSearchService: Send + Sync {
    /// Answer a free-text park query with every matching strategy.
    ///
    /// Rejects empty and over-long queries before any scan runs. A query
    /// that matches nothing is a successful [`AskResponse`] carrying
    /// `SearchOutcome::NoMatches`, not an error.
    async fn ask(&self, query: String, max_results: Option<usize>) -> SearchResult<AskResponse>;

    /// List loaded parks in dataset order, paginated.
    async fn list_parks(&self, limit: Option<usize>, offset: Option<usize>) -> ListParksResponse;

    /// Invalidate the park index cache.
    ///
    /// Should be called after the dataset file changes on disk.
    async fn invalidate_cache(&self);
}

/// Default implementation of ParkSearchService.
pub struct ParkSearchServiceImpl {
    ask_tools: AskTools,
}

impl ParkSearchServiceImpl {
    /// Create a new park search service.
    pub fn new(ask_tools: AskTools) -> Self {
        Self { ask_tools }
    }
}

#[async_trait]
impl ParkSearchService for ParkSearchServiceImpl {
    async fn ask(&self, query: String, max_results: Option<usize>) -> SearchResult<AskResponse> {
        let query = match SearchQuery::new(query) {
            Ok(query) => query,
            Err(e) => {
                self.ask_tools.metrics().track_ask_error();
                return Err(SearchError::InvalidQuery(e.to_string()));
            }
        };

        Ok(self.ask_tools.ask(&query, max_results).await)
    }

    async fn list_parks(&self, limit: Option<usize>, offset: Option<usize>) -> ListParksResponse {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let offset = offset.unwrap_or(0);

        self.ask_tools.list_parks(limit, offset).await
    }

    async fn invalidate_cache(&self) {
        self.ask_tools.invalidate_cache();
    }
}
