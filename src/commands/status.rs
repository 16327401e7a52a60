//! Status command implementation

use crate::config::Config;
use crate::embed::create_embedder;
use crate::error::Result;
use crate::store::{Store, StoreStats};
use serde::Serialize;

/// System status for CLI display
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub base_dir: String,
    pub db_file: String,
    pub embedder: String,
    pub dimension: usize,
    pub stats: StoreStats,
}

/// Gather configuration and store statistics
pub async fn cmd_status(config: &Config, store: &Store) -> Result<Status> {
    let embedder = create_embedder(&config.embedding);
    let stats = store.stats().await?;

    Ok(Status {
        base_dir: config.paths.base_dir.display().to_string(),
        db_file: config.paths.db_file.display().to_string(),
        embedder: format!("{} v{}", embedder.name(), embedder.version()),
        dimension: embedder.dimension(),
        stats,
    })
}

/// Print status to the console
pub fn print_status(status: &Status) {
    println!("\narchivist status\n");
    println!("  Data dir:    {}", status.base_dir);
    println!("  Database:    {}", status.db_file);
    println!("  Embedder:    {} ({} dims)", status.embedder, status.dimension);
    println!("  Collections: {}", status.stats.collection_count);
    println!("  Documents:   {}", status.stats.document_count);
    println!("  Chunks:      {}", status.stats.chunk_count);
    println!();
}
