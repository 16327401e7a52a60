//! Ask command implementation
//!
//! The end-to-end retrieval-augmented flow: embed the question, scan the
//! store (scoped to a collection when given), rank by cosine similarity,
//! and hand the retrieved context to the answer generator. Zero retrieved
//! chunks is a successful outcome with a canned answer, not an error, and
//! skips the generator entirely.

use crate::answer::AnswerGenerator;
use crate::config::Config;
use crate::embed::{create_embedder, embed_one};
use crate::error::Result;
use crate::rank::rank;
use crate::store::Store;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Answer returned when retrieval finds nothing
pub const NO_RESULTS_ANSWER: &str =
    "No relevant documents found. Upload a document to improve results.";

/// Separator between retrieved chunks in the generator context
const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Ask options
#[derive(Debug, Clone, Default)]
pub struct AskOptions {
    /// Number of chunks to retrieve
    pub k: Option<usize>,
    /// Restrict to one collection (ID or name)
    pub collection: Option<String>,
}

/// A source document that contributed to an answer
#[derive(Debug, Clone, Serialize)]
pub struct SourceScore {
    pub name: String,
    /// Best chunk score for this document, as an integer percentage
    pub score: i32,
}

/// The answer and its sources
#[derive(Debug, Clone, Serialize)]
pub struct AskResult {
    pub answer: String,
    pub sources: Vec<SourceScore>,
}

/// Answer a question grounded in retrieved chunks
pub async fn cmd_ask(
    config: &Config,
    store: &Store,
    generator: &dyn AnswerGenerator,
    query: &str,
    options: AskOptions,
) -> Result<AskResult> {
    info!("Asking: {}", query);
    let k = options.k.unwrap_or(config.query.ask_k);

    let embedder = create_embedder(&config.embedding);
    store.register_embedder(embedder.as_ref()).await?;
    let query_vector = embed_one(embedder.as_ref(), query).await?;

    let chunks = match options.collection.as_deref() {
        Some(selector) => {
            let collection = super::resolve_collection(config, store, Some(selector)).await?;
            store.chunks_by_collection(&collection.id).await?
        }
        None => store.all_chunks().await?,
    };
    debug!("Scanning {} chunks", chunks.len());

    let candidates = chunks
        .into_iter()
        .map(|chunk| (chunk.vector, (chunk.chunk_text, chunk.document_name)))
        .collect();
    let retrieved = rank(&query_vector, candidates, k);

    if retrieved.is_empty() {
        return Ok(AskResult {
            answer: NO_RESULTS_ANSWER.to_string(),
            sources: Vec::new(),
        });
    }

    let context = retrieved
        .iter()
        .map(|((text, _), _)| text.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR);

    let answer = generator.generate(query, &context).await?;

    // Best chunk score per document, as integer percent
    let mut best: HashMap<String, f32> = HashMap::new();
    for ((_, name), score) in &retrieved {
        let entry = best.entry(name.clone()).or_insert(f32::MIN);
        if *score > *entry {
            *entry = *score;
        }
    }
    let sources = best
        .into_iter()
        .map(|(name, score)| SourceScore {
            name,
            score: (score * 100.0).round() as i32,
        })
        .collect();

    Ok(AskResult { answer, sources })
}

/// Print an answer with its sources
pub fn print_ask_result(result: &AskResult) {
    println!("\n{}\n", result.answer);

    if !result.sources.is_empty() {
        println!("Sources:");
        for source in &result.sources {
            println!("  {} ({}%)", source.name, source.score);
        }
    }
}
