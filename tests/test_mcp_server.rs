//! Tests for the MCP server surface and file-backed wiring.
//!
//! The protocol transport itself belongs to rmcp; these tests cover
//! what this crate adds on top: server construction, the advertised
//! info, and the full pipeline running over a dataset file on disk the
//! way the binary wires it.

use parks_mcp_server::config::Config;
use parks_mcp_server::embedding::{Embedder, HashEmbedder};
use parks_mcp_server::matching::{MatchMethod, ParkMatcher, SearchOutcome};
use parks_mcp_server::observability::MetricsTracker;
use parks_mcp_server::repositories::{JsonParkRepository, ParkRepository};
use parks_mcp_server::server::ParksMcpServer;
use parks_mcp_server::services::{ParkSearchService, ParkSearchServiceImpl};
use parks_mcp_server::tools::AskTools;
use rmcp::ServerHandler;
use std::path::PathBuf;
use std::sync::Arc;

const DATASET: &str = r#"[
  {
    "park_name": "Hocking Hills State Park",
    "address": "19852 State Route 664 S, Logan, OH 43138",
    "latitude": "39.4295",
    "longitude": "-82.5362",
    "description": "Famous for its caves, cliffs and waterfalls in southeastern Ohio.",
    "activities": ["Hiking", "Camping"],
    "url": "https://ohiodnr.gov/hocking-hills",
    "google_results": [
      {
        "title": "Hocking Hills State Park",
        "link": "https://ohiodnr.gov/hocking-hills",
        "snippet": "Hocking Hills State Park features Old Man's Cave and Cedar Falls.",
        "position": 1
      }
    ]
  },
  {
    "park_name": "Deer Creek State Park",
    "description": "A resort park with a lodge, golf course and boating on the lake.",
    "activities": ["Boating", "Golf"]
  }
]"#;

fn write_dataset(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "parks_mcp_server_{}_{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, DATASET).unwrap();
    path
}

fn service_over_file(path: &PathBuf) -> ParkSearchServiceImpl {
    let park_repo = Arc::new(JsonParkRepository::new(path)) as Arc<dyn ParkRepository>;
    let embedder = Arc::new(HashEmbedder::default()) as Arc<dyn Embedder>;
    let matcher = ParkMatcher::new(embedder.clone(), 0.5, 80);
    let tools = AskTools::new(park_repo, embedder, matcher, MetricsTracker::new(), 300);
    ParkSearchServiceImpl::new(tools)
}

#[test]
fn test_server_advertises_its_tools() {
    let config = Config::default();
    let park_repo =
        Arc::new(JsonParkRepository::new(&config.dataset_path)) as Arc<dyn ParkRepository>;
    let embedder = Arc::new(HashEmbedder::default()) as Arc<dyn Embedder>;

    let server = ParksMcpServer::new(park_repo, embedder, &config);
    let info = server.get_info();

    assert_eq!(info.server_info.name, "parks-mcp-server");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("park"));
}

/// The full pipeline over a dataset file on disk, wired the way the
/// binary wires it.
#[tokio::test]
async fn test_ask_over_dataset_file() {
    let path = write_dataset("ask");
    let service = service_over_file(&path);

    let response = service
        .ask("Hocking Hills State Park".to_string(), None)
        .await
        .unwrap();
    assert_eq!(response.index_size, 2);

    let records = match response.outcome {
        SearchOutcome::Matches(records) => records,
        SearchOutcome::NoMatches => panic!("expected matches"),
    };
    assert_eq!(records[0].park_name, "Hocking Hills State Park");
    assert!(records
        .iter()
        .any(|r| r.matching_method == MatchMethod::ExactPhrase));

    // The URL from the dataset flows through to the record verbatim.
    let exact = records
        .iter()
        .find(|r| r.matching_method == MatchMethod::ExactPhrase)
        .unwrap();
    assert_eq!(exact.url, "https://ohiodnr.gov/hocking-hills");

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_list_parks_over_dataset_file() {
    let path = write_dataset("list");
    let service = service_over_file(&path);

    let listing = service.list_parks(None, None).await;

    assert_eq!(listing.total, 2);
    assert_eq!(listing.parks[0].name, "Hocking Hills State Park");
    assert_eq!(listing.parks[0].activities, vec!["Hiking", "Camping"]);
    assert_eq!(
        listing.parks[0].url.as_deref(),
        Some("https://ohiodnr.gov/hocking-hills")
    );
    assert_eq!(listing.parks[1].name, "Deer Creek State Park");
    assert_eq!(listing.parks[1].url, None);
    assert_eq!(listing.embedder_id, "hash");

    std::fs::remove_file(&path).ok();
}

/// A missing dataset file degrades to the no-matches answer instead of
/// failing the request.
#[tokio::test]
async fn test_missing_dataset_file_degrades() {
    let path = std::env::temp_dir().join(format!(
        "parks_mcp_server_missing_{}.json",
        std::process::id()
    ));
    let service = service_over_file(&path);

    let response = service
        .ask("Hocking Hills State Park".to_string(), None)
        .await
        .unwrap();

    assert_eq!(response.outcome, SearchOutcome::NoMatches);
    assert_eq!(response.index_size, 0);
}
