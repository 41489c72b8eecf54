//! Performance benchmarks for the ask pipeline.
//!
//! These benchmarks measure matching performance under various conditions:
//! - Cache miss (first query, index must be built)
//! - Cache hit (subsequent queries using the cached index)
//! - Different dataset sizes
//! - Queries dominated by different strategies

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use parks_mcp_server::domain::SearchQuery;
use parks_mcp_server::embedding::{Embedder, HashEmbedder};
use parks_mcp_server::error::ParkDataResult;
use parks_mcp_server::matching::ParkMatcher;
use parks_mcp_server::models::Park;
use parks_mcp_server::observability::MetricsTracker;
use parks_mcp_server::repositories::ParkRepository;
use parks_mcp_server::tools::AskTools;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// In-memory repository so benchmarks never touch the filesystem.
#[derive(Clone)]
struct StaticParkRepository {
    parks: Vec<Park>,
}

#[async_trait]
impl ParkRepository for StaticParkRepository {
    async fn load_all(&self) -> ParkDataResult<Vec<Park>> {
        Ok(self.parks.clone())
    }

    fn source(&self) -> String {
        "bench://parks".to_string()
    }
}

/// Build a synthetic dataset with enough textual variety that every
/// strategy has work to do.
fn make_parks(count: usize) -> Vec<Park> {
    let regions = ["northern", "southern", "eastern", "western", "central"];
    let themes = [
        ("lake", "boating and fishing on a glacial lake"),
        ("gorge", "hiking trails through a sandstone gorge"),
        ("forest", "camping under old growth hemlock forest"),
        ("river", "canoeing and kayaking on a scenic river"),
        ("prairie", "bird watching across restored tallgrass prairie"),
    ];

    (0..count)
        .map(|i| {
            let region = regions[i % regions.len()];
            let (theme, description) = themes[(i / regions.len()) % themes.len()];
            let mut park = Park::new(format!("{} {} state park {}", region, theme, i));
            park.description = Some(format!("A {} park offering {}.", region, description));
            park.url = Some(format!("https://parks.example/{}", i));
            park
        })
        .collect()
}

fn make_tools(parks: Vec<Park>) -> AskTools {
    let cache_ttl = 300; // 5 minutes
    let park_repo = Arc::new(StaticParkRepository { parks }) as Arc<dyn ParkRepository>;
    let embedder = Arc::new(HashEmbedder::default()) as Arc<dyn Embedder>;
    let matcher = ParkMatcher::new(embedder.clone(), 0.5, 80);
    AskTools::new(park_repo, embedder, matcher, MetricsTracker::new(), cache_ttl)
}

fn warm_index(rt: &Runtime, tools: &AskTools) {
    rt.block_on(async {
        let warmup = SearchQuery::new("warmup").unwrap();
        let _result = tools.ask(&warmup, Some(10)).await;
    });
}

/// Benchmark ask performance with cache miss (index build required).
fn bench_ask_cache_miss(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let parks = make_parks(100);

    c.bench_function("ask_cache_miss", |b| {
        b.to_async(&rt).iter(|| async {
            // Create new AskTools each time to force a cache miss
            let tools = make_tools(parks.clone());
            let query = SearchQuery::new("sandstone gorge hiking").unwrap();
            let _result = tools.ask(&query, Some(10)).await;
        });
    });
}

/// Benchmark ask performance with cache hit (using the cached index).
fn bench_ask_cache_hit(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let tools = make_tools(make_parks(100));
    warm_index(&rt, &tools);

    c.bench_function("ask_cache_hit", |b| {
        b.to_async(&rt).iter(|| async {
            let query = SearchQuery::new("sandstone gorge hiking").unwrap();
            let _result = tools.ask(&query, Some(10)).await;
        });
    });
}

/// Benchmark the per-query scan at different dataset sizes.
fn bench_ask_dataset_sizes(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("ask_dataset_sizes");

    for size in [50, 100, 250, 500] {
        let tools = make_tools(make_parks(size));
        warm_index(&rt, &tools);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.to_async(&rt).iter(|| async {
                let query = SearchQuery::new("sandstone gorge hiking").unwrap();
                let _result = tools.ask(&query, Some(10)).await;
            });
        });
    }

    group.finish();
}

/// Benchmark queries whose cost lands on different strategies.
fn bench_ask_query_styles(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let tools = make_tools(make_parks(250));
    warm_index(&rt, &tools);

    let mut group = c.benchmark_group("ask_query_styles");

    for (style, text) in [
        ("exact_phrase", "northern lake state park 0"),
        ("keywords", "fishing on a glacial lake"),
        ("typo_fuzzy", "sandstone gorge hikng trails"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(style), &text, |b, &text| {
            b.to_async(&rt).iter(|| async {
                let query = SearchQuery::new(text).unwrap();
                let _result = tools.ask(&query, Some(10)).await;
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_ask_cache_miss,
        bench_ask_cache_hit,
        bench_ask_dataset_sizes,
        bench_ask_query_styles
}

criterion_main!(benches);
