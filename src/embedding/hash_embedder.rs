//! Deterministic hash-based embedding backend.
//!
//! A bag-of-tokens random projection: every whitespace token seeds a
//! pseudo-random vector, token vectors are mean-pooled, and the result
//! is L2-normalized. Texts sharing tokens land near each other, equal
//! texts embed identically, and no model assets or network access are
//! needed. This is the default backend and the one the test suite runs
//! against.

use super::Embedder;
use crate::error::EmbeddingResult;
use async_trait::async_trait;

/// Default output dimension, matching the all-MiniLM-L6-v2 transformer
/// so the two backends are interchangeable.
pub const DEFAULT_DIMENSION: usize = 384;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic token-hashing embedder.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create an embedder producing vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut sum = vec![0.0f32; self.dimension];
        let mut tokens = 0usize;

        for token in text.split_whitespace() {
            tokens += 1;
            let mut state = fnv1a_64(token.as_bytes());
            for slot in sum.iter_mut() {
                *slot += unit_sample(&mut state);
            }
        }

        if tokens > 0 {
            let inv = 1.0 / tokens as f32;
            for value in &mut sum {
                *value *= inv;
            }
        }

        l2_normalize(&mut sum);
        sum
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn id(&self) -> &str {
        "hash"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        Ok(self.embed_text(text))
    }
}

/// Draw the next pseudo-random value in [-1, 1) from the SplitMix64 stream.
fn unit_sample(state: &mut u64) -> f32 {
    let bits = splitmix64(state);
    let mantissa = (bits >> 41) as u32;
    // 1.0 <= f < 2.0 from the raw mantissa, shifted down to [-1, 1)
    let unit = f32::from_bits(0x3f80_0000 | mantissa) - 1.0;
    unit.mul_add(2.0, -1.0)
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn l2_normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}
