//! Ask tools for answering park queries over a cached index.
//!
//! Orchestrates the full pipeline: load the dataset, build (or reuse)
//! the park index, run every matching strategy, rank the records.

use crate::cache::TimedCache;
use crate::domain::SearchQuery;
use crate::embedding::Embedder;
use crate::matching::{rank_matches, ParkIndex, ParkMatcher, SearchOutcome};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::ParkRepository;
use crate::text::AnalyzedText;
use serde::Serialize;
use std::sync::Arc;

const INDEX_CACHE_KEY: &str = "park_index";

/// Tools for answering park queries.
#[derive(Clone)]
pub struct AskTools {
    park_repo: Arc<dyn ParkRepository>,
    embedder: Arc<dyn Embedder>,
    matcher: ParkMatcher,
    metrics: MetricsTracker,
    /// Cached park index, rebuilt after the TTL lapses
    cache: TimedCache<String, Arc<ParkIndex>>,
    cache_ttl_secs: u64,
}

/// Response from the ask pipeline with cache metadata.
#[derive(Debug, Clone)]
pub struct AskResponse {
    /// Ranked outcome of the scan
    pub outcome: SearchOutcome,

    /// Whether the index came from cache
    pub from_cache: bool,

    /// Number of parks the strategies scanned
    pub index_size: usize,
}

/// One entry in a park listing.
#[derive(Debug, Clone, Serialize)]
pub struct ParkSummary {
    /// Park name, `"Unknown"` when the record has none
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
}

/// Response from a paginated park listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListParksResponse {
    /// Parks in dataset order, after `limit`/`offset` are applied
    pub parks: Vec<ParkSummary>,

    /// Number of parks in the full dataset
    pub total: usize,

    /// Whether the index came from cache
    pub from_cache: bool,

    /// When the index was built, RFC 3339
    pub index_built_at: String,

    /// Identifier of the embedding backend the index was built with
    pub embedder_id: String,
}

impl AskTools {
    /// Create new ask tools.
    ///
    /// # Arguments
    /// * `park_repo` - ParkRepository for dataset access
    /// * `embedder` - Backend used to embed parks and queries
    /// * `matcher` - Strategy runner shared with the query side
    /// * `metrics` - Counter sink for queries, cache accesses and failures
    /// * `cache_ttl_secs` - Index cache time-to-live in seconds
    pub fn new(
        park_repo: Arc<dyn ParkRepository>,
        embedder: Arc<dyn Embedder>,
        matcher: ParkMatcher,
        metrics: MetricsTracker,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            park_repo,
            embedder,
            matcher,
            metrics,
            cache: TimedCache::new(cache_ttl_secs),
            cache_ttl_secs,
        }
    }

    /// Answer a query with every matching strategy.
    ///
    /// The index is built on first use and reused until the TTL lapses.
    /// `max_results` truncates the ranked records after sorting; `None`
    /// keeps them all.
    pub async fn ask(&self, query: &SearchQuery, max_results: Option<usize>) -> AskResponse {
        let timer = Timer::new("ask");

        let (index, from_cache) = self.get_or_build_index().await;

        let analyzed = AnalyzedText::of(query.as_str());
        let records = self.matcher.find_matches(&analyzed, &index).await;
        let mut outcome = rank_matches(records);

        if let (SearchOutcome::Matches(records), Some(limit)) = (&mut outcome, max_results) {
            records.truncate(limit);
        }

        let duration_ms = timer.finish();
        self.metrics
            .track_ask_query(duration_ms, outcome.record_count());

        AskResponse {
            outcome,
            from_cache,
            index_size: index.len(),
        }
    }

    /// List loaded parks in dataset order.
    pub async fn list_parks(&self, limit: usize, offset: usize) -> ListParksResponse {
        let (index, from_cache) = self.get_or_build_index().await;

        let parks = index
            .parks()
            .iter()
            .skip(offset)
            .take(limit)
            .map(|entry| ParkSummary {
                name: entry.park.display_name().to_string(),
                url: entry.park.url.clone(),
                activities: entry.park.activities.clone(),
            })
            .collect();

        ListParksResponse {
            parks,
            total: index.len(),
            from_cache,
            index_built_at: index.built_at().to_rfc3339(),
            embedder_id: index.embedder_id().to_string(),
        }
    }

    /// Get the cached park index or build a new one.
    ///
    /// A failed dataset load is logged and degrades to an empty index,
    /// so every strategy scans nothing and the query answers no-matches.
    /// The empty index is not cached; the next request retries the file.
    async fn get_or_build_index(&self) -> (Arc<ParkIndex>, bool) {
        let cache_key = INDEX_CACHE_KEY.to_string();

        if let Some(index) = self.cache.get(&cache_key) {
            self.metrics.track_cache_access(true);
            tracing::debug!("Using cached park index");
            return (index, true);
        }
        self.metrics.track_cache_access(false);

        tracing::info!("Building park index from {}", self.park_repo.source());
        let timer = Timer::new("index_build");

        let (parks, loaded) = match self.park_repo.load_all().await {
            Ok(parks) => (parks, true),
            Err(e) => {
                tracing::error!(
                    "Failed to load parks from {}: {}",
                    self.park_repo.source(),
                    e
                );
                (Vec::new(), false)
            }
        };

        let index = Arc::new(ParkIndex::build(parks, self.embedder.as_ref()).await);

        let failed_embeddings = index
            .parks()
            .iter()
            .filter(|entry| entry.embedding.is_none())
            .count() as u64;
        if failed_embeddings > 0 {
            self.metrics.track_embedding_failures(failed_embeddings);
        }

        if loaded {
            self.cache.insert(cache_key, index.clone());
        }

        timer.finish_with_status(loaded);
        (index, false)
    }

    /// Drop the cached index so the next request rebuilds it.
    ///
    /// Call after the dataset file changes on disk to pick up fresh data
    /// before the TTL lapses.
    pub fn invalidate_cache(&self) {
        self.cache.remove(&INDEX_CACHE_KEY.to_string());
        tracing::debug!("Park index cache invalidated");
    }

    /// Metrics tracker shared with these tools.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}
