//! Metrics tracking for the parks MCP server.
//!
//! Counts queries, errors, cache traffic, and embedding failures so an
//! operator can see how the matching pipeline behaves over time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Process-wide metrics, cheap to clone and share.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    ask_queries_total: Arc<AtomicU64>,
    ask_errors_total: Arc<AtomicU64>,
    cache_hits_total: Arc<AtomicU64>,
    cache_misses_total: Arc<AtomicU64>,
    embedding_failures_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            ask_queries_total: Arc::new(AtomicU64::new(0)),
            ask_errors_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            embedding_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed ask query.
    pub fn track_ask_query(&self, duration_ms: u128, record_count: usize) {
        self.ask_queries_total.fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            duration_ms = duration_ms,
            record_count = record_count,
            "Ask query completed"
        );
    }

    /// Track an ask query that ended in an error.
    pub fn track_ask_error(&self) {
        self.ask_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track an index cache lookup.
    pub fn track_cache_access(&self, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Index cache hit");
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Index cache miss");
        }
    }

    /// Track embedding calls that failed during an index build.
    pub fn track_embedding_failures(&self, count: u64) {
        self.embedding_failures_total.fetch_add(count, Ordering::Relaxed);
    }

    /// Total ask queries handled.
    pub fn ask_queries_total(&self) -> u64 {
        self.ask_queries_total.load(Ordering::Relaxed)
    }

    /// Total ask queries that errored.
    pub fn ask_errors_total(&self) -> u64 {
        self.ask_errors_total.load(Ordering::Relaxed)
    }

    /// Total index cache hits.
    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    /// Total index cache misses.
    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    /// Total embedding failures (query or park side).
    pub fn embedding_failures_total(&self) -> u64 {
        self.embedding_failures_total.load(Ordering::Relaxed)
    }

    /// Index cache hit rate (0.0 to 1.0).
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits_total() as f64;
        let total = (self.cache_hits_total() + self.cache_misses_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Ask error rate (0.0 to 1.0).
    pub fn ask_error_rate(&self) -> f64 {
        let errors = self.ask_errors_total() as f64;
        let total = self.ask_queries_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    /// Human-readable snapshot of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Ask Queries: {}\n\
             Ask Errors: {} ({:.2}% error rate)\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%\n\
             Embedding Failures: {}",
            self.ask_queries_total(),
            self.ask_errors_total(),
            self.ask_error_rate() * 100.0,
            self.cache_hits_total(),
            self.cache_misses_total(),
            self.cache_hit_rate() * 100.0,
            self.embedding_failures_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }

    /// Finish the timer, logging at warn level when the operation failed.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}
