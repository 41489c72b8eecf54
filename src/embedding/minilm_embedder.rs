//! all-MiniLM-L6-v2 sentence-transformer backend (ONNX via fastembed).
//!
//! The same model the park dataset was originally scored with. Model
//! assets are fetched into the local fastembed cache on first load, so
//! this backend is gated behind the `fastembed` cargo feature and
//! selected with `PARKS_EMBEDDING_MODE=minilm`.

use super::Embedder;
use crate::error::{EmbeddingError, EmbeddingResult};
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::{Arc, Mutex};

/// Output dimension of all-MiniLM-L6-v2.
pub const MINILM_DIMENSION: usize = 384;

const BACKEND_ID: &str = "minilm";

/// Sentence-transformer embedding backend.
pub struct MiniLmEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
    dimension: usize,
}

impl MiniLmEmbedder {
    /// Load the model, downloading ONNX assets on first use.
    pub fn new() -> EmbeddingResult<Self> {
        let options =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false);

        let model = TextEmbedding::try_new(options).map_err(|e| EmbeddingError::Backend {
            backend: BACKEND_ID.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            dimension: MINILM_DIMENSION,
        })
    }
}

#[async_trait]
impl Embedder for MiniLmEmbedder {
    fn id(&self) -> &str {
        BACKEND_ID
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();

        // Inference is CPU-bound and the fastembed API is blocking
        let mut embedding = tokio::task::spawn_blocking(move || {
            let mut model = model.lock().map_err(|_| EmbeddingError::Backend {
                backend: BACKEND_ID.to_string(),
                reason: "model lock poisoned".to_string(),
            })?;

            let mut embeddings =
                model
                    .embed(vec![text], None)
                    .map_err(|e| EmbeddingError::Backend {
                        backend: BACKEND_ID.to_string(),
                        reason: e.to_string(),
                    })?;

            embeddings.pop().ok_or_else(|| EmbeddingError::Backend {
                backend: BACKEND_ID.to_string(),
                reason: "no embedding returned".to_string(),
            })
        })
        .await
        .map_err(|e| EmbeddingError::Other(format!("embedding task failed: {e}")))??;

        if embedding.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }

        normalize_in_place(&mut embedding);
        Ok(embedding)
    }
}

fn normalize_in_place(embedding: &mut [f32]) {
    let norm_sq: f32 = embedding.iter().map(|x| x * x).sum();
    if norm_sq.is_finite() && norm_sq > f32::EPSILON {
        let inv_norm = 1.0 / norm_sq.sqrt();
        for value in embedding.iter_mut() {
            *value *= inv_norm;
        }
    } else {
        // NaN/Inf contamination would poison every similarity downstream
        embedding.fill(0.0);
    }
}
