//! Ingest command implementation

use crate::config::Config;
use crate::embed::create_embedder;
use crate::error::{Error, Result};
use crate::extract::extract_text;
use crate::store::{Document, Store};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

/// Ingest a single file into a collection
pub async fn cmd_ingest(
    config: &Config,
    store: &Store,
    path: &Path,
    collection_selector: Option<&str>,
) -> Result<Document> {
    if !path.is_file() {
        return Err(Error::InvalidPath(path.display().to_string()));
    }

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?
        .to_string();

    let collection = super::resolve_collection(config, store, collection_selector).await?;
    info!("Ingesting '{}' into collection '{}'", filename, collection.name);

    let content = extract_text(path)?;
    let embedder = create_embedder(&config.embedding);

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message(filename.clone());

    let document = store
        .save_document(
            embedder.as_ref(),
            config.chunk.max_chars,
            &collection.id,
            &filename,
            &content,
            Some(|percent: u8| bar.set_position(u64::from(percent))),
        )
        .await?;

    bar.finish_and_clear();
    Ok(document)
}

/// Print an ingestion summary to the console
pub fn print_ingest_result(document: &Document) {
    println!("✓ Ingested '{}'", document.filename);
    println!("  Document ID: {}", document.id);
    println!("  Chunks: {}", document.chunk_count);
}
