//! Multi-strategy park matching.
//!
//! Every park is checked against four independent strategies: exact
//! phrase containment, embedding similarity, keyword overlap, and fuzzy
//! partial-ratio. The strategies are not exclusive; one park can produce
//! up to four match records per query, each tagged with the method that
//! found it.

use crate::embedding::{cosine_similarity, Embedder};
use crate::matching::park_index::{IndexedPark, ParkIndex};
use crate::matching::partial_ratio::partial_ratio;
use crate::models::Park;
use crate::text::AnalyzedText;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Strategy that produced a match record.
///
/// Serialized names are the labels clients already key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMethod {
    /// A query phrase occurs verbatim in the park's comparison text
    #[serde(rename = "Exact Phrase Match")]
    ExactPhrase,

    /// Embedding cosine similarity cleared the threshold
    #[serde(rename = "Embedding Similarity")]
    EmbeddingSimilarity,

    /// Query and park share phrases or keyword lemmas
    #[serde(rename = "Keyword Overlap")]
    KeywordOverlap,

    /// Fuzzy partial-ratio cleared the threshold
    #[serde(rename = "Fuzzy Matching")]
    FuzzyMatching,
}

/// One match record as returned to clients.
///
/// Exactly one of the three score fields is set, depending on the
/// matching method; exact phrase matches carry no score at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkMatch {
    /// Park name, `"Unknown"` when the record has none
    pub park_name: String,

    /// Description, `"No description available."` when missing
    pub description: String,

    /// Feature text, `"No features available"` when missing
    pub features: String,

    /// Source URL, `"No URL available"` when missing
    pub url: String,

    /// Cosine similarity rounded to two decimals (embedding matches only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f32>,

    /// Count of shared phrases and lemmas (keyword overlap matches only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_score: Option<usize>,

    /// Partial ratio 0-100 (fuzzy matches only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_score: Option<u8>,

    /// Strategy that produced this record
    pub matching_method: MatchMethod,
}

fn record(park: &Park, method: MatchMethod) -> ParkMatch {
    ParkMatch {
        park_name: park.display_name().to_string(),
        description: park.display_description().to_string(),
        features: park.display_features().to_string(),
        url: park.display_url().to_string(),
        similarity_score: None,
        overlap_score: None,
        fuzzy_score: None,
        matching_method: method,
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Scores parks against a query with all four strategies.
///
/// The embedder and both thresholds are injected at construction, so a
/// matcher carries no global state and tests can tighten or loosen the
/// strategies freely.
#[derive(Clone)]
pub struct ParkMatcher {
    embedder: Arc<dyn Embedder>,
    embedding_threshold: f32,
    fuzzy_threshold: u8,
}

impl ParkMatcher {
    /// Create a matcher.
    ///
    /// # Arguments
    /// * `embedder` - Backend used to embed the query text
    /// * `embedding_threshold` - Cosine similarity must exceed this (strict)
    /// * `fuzzy_threshold` - Partial ratio must exceed this (strict)
    pub fn new(embedder: Arc<dyn Embedder>, embedding_threshold: f32, fuzzy_threshold: u8) -> Self {
        Self {
            embedder,
            embedding_threshold,
            fuzzy_threshold,
        }
    }

    /// Run every strategy for every indexed park.
    ///
    /// Records are appended in index order, and per park in strategy
    /// order, so output is deterministic for a given query and dataset.
    /// The query is embedded once; if that fails the similarity strategy
    /// is skipped for the whole scan and the rest still run.
    pub async fn find_matches(&self, query: &AnalyzedText, index: &ParkIndex) -> Vec<ParkMatch> {
        let query_embedding = match self.embedder.embed(query.text()).await {
            Ok(vector) => Some(vector),
            Err(e) => {
                tracing::warn!("Failed to embed query: {}", e);
                None
            }
        };

        let mut results = Vec::new();
        for entry in index.parks() {
            self.match_park(query, query_embedding.as_deref(), entry, &mut results);
        }
        results
    }

    fn match_park(
        &self,
        query: &AnalyzedText,
        query_embedding: Option<&[f32]>,
        entry: &IndexedPark,
        results: &mut Vec<ParkMatch>,
    ) {
        let comparison = &entry.comparison;

        // Exact phrase containment
        if query
            .phrases()
            .iter()
            .any(|phrase| comparison.text().contains(phrase.as_str()))
        {
            results.push(record(&entry.park, MatchMethod::ExactPhrase));
        }

        // Embedding similarity, when both sides have a vector
        if let (Some(query_vector), Some(park_vector)) =
            (query_embedding, entry.embedding.as_deref())
        {
            let similarity = cosine_similarity(query_vector, park_vector);
            if similarity > self.embedding_threshold {
                let mut matched = record(&entry.park, MatchMethod::EmbeddingSimilarity);
                matched.similarity_score = Some(round2(similarity));
                results.push(matched);
            }
        }

        // Keyword overlap on shared phrases or lemmas
        let shared_phrases = query.phrases().intersection(comparison.phrases()).count();
        let shared_lemmas = query.lemmas().intersection(comparison.lemmas()).count();
        if shared_phrases + shared_lemmas > 0 {
            let mut matched = record(&entry.park, MatchMethod::KeywordOverlap);
            matched.overlap_score = Some(shared_phrases + shared_lemmas);
            results.push(matched);
        }

        // Fuzzy partial-ratio of the whole query against the park text
        let fuzzy = partial_ratio(query.text(), comparison.text());
        if fuzzy > self.fuzzy_threshold {
            let mut matched = record(&entry.park, MatchMethod::FuzzyMatching);
            matched.fuzzy_score = Some(fuzzy);
            results.push(matched);
        }
    }
}
