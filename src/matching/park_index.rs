//! Precomputed search index over the parks dataset.
//!
//! Analyzing and embedding every park on every request would repeat the
//! same work per query, so the index does it once per dataset load. Each
//! entry carries the park, the analyzed comparison text, and the park's
//! embedding; matching then only touches the query side.

use crate::embedding::Embedder;
use crate::models::{Park, ParkRef};
use crate::text::{normalize, AnalyzedText};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Max parks embedded concurrently during a build
const EMBED_CONCURRENCY: usize = 8;

/// One park with its precomputed matching inputs.
#[derive(Debug, Clone)]
pub struct IndexedPark {
    /// The underlying park record
    pub park: ParkRef,

    /// Analyzed comparison text (name, description, features)
    pub comparison: AnalyzedText,

    /// Embedding of the comparison text, if the backend produced one
    pub embedding: Option<Arc<Vec<f32>>>,
}

/// Index over the full parks dataset.
///
/// Entries keep their dataset order so matching output is deterministic
/// run to run.
pub struct ParkIndex {
    parks: Vec<IndexedPark>,
    embedder_id: String,
    built_at: DateTime<Utc>,
}

/// Build the comparison text the way the matcher expects it: each field
/// normalized on its own, joined by single spaces, missing fields empty.
fn comparison_text(park: &Park) -> String {
    let name = normalize(park.park_name.as_deref().unwrap_or(""));
    let description = normalize(park.description.as_deref().unwrap_or(""));
    let features = normalize(park.feature_snippet().unwrap_or(""));
    format!("{} {} {}", name, description, features)
}

impl ParkIndex {
    /// Build an index from a dataset.
    ///
    /// Parks are analyzed and embedded with bounded concurrency but kept
    /// in dataset order. A park whose embedding fails is still indexed;
    /// only its similarity strategy is disabled.
    pub async fn build(parks: Vec<Park>, embedder: &dyn Embedder) -> Self {
        let start = std::time::Instant::now();

        let indexed = stream::iter(parks.into_iter().map(Arc::new))
            .map(|park| async move {
                let comparison = AnalyzedText::of(&comparison_text(&park));

                let embedding = match embedder.embed(comparison.text()).await {
                    Ok(vector) => Some(Arc::new(vector)),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to embed park {}: {}",
                            park.display_name(),
                            e
                        );
                        None
                    }
                };

                IndexedPark {
                    park,
                    comparison,
                    embedding,
                }
            })
            .buffered(EMBED_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        tracing::info!(
            "Park index built in {}ms ({} parks, embedder: {})",
            start.elapsed().as_millis(),
            indexed.len(),
            embedder.id()
        );

        Self {
            parks: indexed,
            embedder_id: embedder.id().to_string(),
            built_at: Utc::now(),
        }
    }

    /// Indexed parks in dataset order.
    pub fn parks(&self) -> &[IndexedPark] {
        &self.parks
    }

    /// Number of indexed parks.
    pub fn len(&self) -> usize {
        self.parks.len()
    }

    /// Whether the dataset was empty.
    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    /// Identifier of the backend that embedded this index.
    pub fn embedder_id(&self) -> &str {
        &self.embedder_id
    }

    /// When the index was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}

impl std::fmt::Debug for ParkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkIndex")
            .field("parks", &self.parks.len())
            .field("embedder_id", &self.embedder_id)
            .field("built_at", &self.built_at)
            .finish()
    }
}
