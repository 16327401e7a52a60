//! Hash-projection embedder
//!
//! Maps text to a fixed-length vector without any model: each token is
//! hashed with FNV-1a, projected into a slot by `hash % dimension`, and
//! added with a sign taken from the hash's low bit. Sign projection
//! reduces collision bias compared to unsigned counting. The result is
//! L2-normalized so cosine similarity reduces to a dot product.
//!
//! The trade-off is deliberate: deterministic, offline, O(text length),
//! at the cost of semantic quality. Retrieval only needs to rank.

use super::Embedder;
use crate::error::Result;
use async_trait::async_trait;

const FNV_SEED: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Deterministic hash-projection embedder
pub struct HashEmbedder {
    dimension: usize,
    max_input_chars: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize, max_input_chars: usize) -> Self {
        Self {
            dimension,
            max_input_chars,
        }
    }

    /// FNV-1a over the token bytes
    fn hash_token(token: &str) -> u32 {
        let mut hash = FNV_SEED;
        for byte in token.bytes() {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }

    /// Embed a single text into an L2-normalized vector
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        // Bound work on huge inputs
        let bounded: String = text.chars().take(self.max_input_chars).collect();

        for token in bounded
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let hash = Self::hash_token(token);
            let slot = (hash as usize) % self.dimension;
            if hash & 1 == 1 {
                vector[slot] += 1.0;
            } else {
                vector[slot] -= 1.0;
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "fnv1a-sign-projection"
    }

    fn version(&self) -> u32 {
        1
    }
}
