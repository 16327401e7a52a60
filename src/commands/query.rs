//! Query command implementation (retrieval only, no answer generation)

use crate::config::Config;
use crate::embed::{create_embedder, embed_one};
use crate::error::Result;
use crate::rank::{rank, ScoredChunk};
use crate::store::Store;
use serde::Serialize;
use tracing::{debug, info};

/// Query options
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Number of results to return
    pub k: Option<usize>,
    /// Restrict to one collection (ID or name)
    pub collection: Option<String>,
}

/// Query result for CLI display
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub results: Vec<ScoredChunk>,
    pub chunks_searched: usize,
}

/// Retrieve the top-K chunks for a query
pub async fn cmd_query(
    config: &Config,
    store: &Store,
    query: &str,
    options: QueryOptions,
) -> Result<QueryResult> {
    info!("Querying: {}", query);
    let k = options.k.unwrap_or(config.query.default_k);

    let embedder = create_embedder(&config.embedding);
    store.register_embedder(embedder.as_ref()).await?;
    let query_vector = embed_one(embedder.as_ref(), query).await?;

    // Indexed scan when scoped, full scan otherwise
    let chunks = match options.collection.as_deref() {
        Some(selector) => {
            let collection = super::resolve_collection(config, store, Some(selector)).await?;
            store.chunks_by_collection(&collection.id).await?
        }
        None => store.all_chunks().await?,
    };
    let searched = chunks.len();
    debug!("Scanning {} chunks", searched);

    let candidates = chunks
        .into_iter()
        .map(|chunk| {
            (
                chunk.vector,
                ScoredChunk {
                    text: chunk.chunk_text,
                    document_name: chunk.document_name,
                    score: 0.0,
                },
            )
        })
        .collect();

    let results = rank(&query_vector, candidates, k)
        .into_iter()
        .map(|(mut chunk, score)| {
            chunk.score = score;
            chunk
        })
        .collect();

    Ok(QueryResult {
        query: query.to_string(),
        results,
        chunks_searched: searched,
    })
}

/// Print query results to the console
pub fn print_query_results(result: &QueryResult) {
    println!("\n🔍 Query: {}\n", result.query);
    println!(
        "Found {} results ({} chunks searched):\n",
        result.results.len(),
        result.chunks_searched
    );

    for (i, r) in result.results.iter().enumerate() {
        println!("{}. [score: {:.3}] {}", i + 1, r.score, r.document_name);

        let preview: String = r.text.chars().take(200).collect();
        let suffix = if r.text.chars().count() > 200 { "..." } else { "" };
        println!("   {}{}\n", preview.replace('\n', " "), suffix);
    }
}
