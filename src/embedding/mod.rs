//! Text embedding backends.
//!
//! The matching pipeline consumes embeddings through the [`Embedder`]
//! trait and receives its backend by constructor injection; nothing in
//! this crate holds a process-wide model singleton. The default backend
//! is the deterministic [`HashEmbedder`]; building with the `fastembed`
//! cargo feature adds [`MiniLmEmbedder`], the all-MiniLM-L6-v2 sentence
//! transformer.

pub mod hash_embedder;
#[cfg(feature = "fastembed")]
pub mod minilm_embedder;

pub use hash_embedder::HashEmbedder;
#[cfg(feature = "fastembed")]
pub use minilm_embedder::MiniLmEmbedder;

use crate::error::EmbeddingResult;
use async_trait::async_trait;

/// A semantic text-embedding backend.
///
/// Implementations must be safe for concurrent read-only use; the
/// pipeline shares one instance behind an `Arc` for the process
/// lifetime.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Stable backend identifier for logging.
    fn id(&self) -> &str;

    /// Output vector dimension.
    fn dimension(&self) -> usize;

    /// Embed one text into a fixed-size vector.
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>>;
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when the lengths differ or either vector has zero norm,
/// so degenerate inputs can never fire the similarity strategy.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5, -0.25, 1.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0, 2.0];
        let b = vec![-1.0, -2.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_mismatched_lengths() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}
