//! Embedding generation
//!
//! This module provides an abstraction over embedding backends with:
//! - A trait so a model-backed embedder can slot in later
//! - A deterministic hash-projection embedder with no external dependencies

mod hash;

pub use hash::*;

use crate::config::EmbeddingConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Trait for embedding providers
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>>;

    /// Get the embedding dimension
    fn dimension(&self) -> usize;

    /// Get the embedder name
    fn name(&self) -> &str;

    /// Get the embedder algorithm version
    fn version(&self) -> u32;
}

/// Create an embedder based on configuration
pub fn create_embedder(config: &EmbeddingConfig) -> Box<dyn Embedder> {
    Box::new(HashEmbedder::new(config.dimension, config.max_input_chars))
}

/// Embed a single text, returning its vector
pub async fn embed_one(embedder: &dyn Embedder, text: &str) -> Result<Vec<f32>> {
    let mut vectors = embedder.embed(vec![text.to_string()]).await?;
    vectors
        .pop()
        .ok_or_else(|| crate::error::Error::Embedding("no embedding returned".to_string()))
}
