//! Collection and document administration commands

use crate::config::Config;
use crate::error::Result;
use crate::store::{Collection, Document, Store};

/// List all collections, creating the default one if the store is empty
pub async fn cmd_list_collections(config: &Config, store: &Store) -> Result<Vec<Collection>> {
    store
        .ensure_default_collection(&config.default_collection_name)
        .await?;
    store.list_collections().await
}

/// Create a new collection
pub async fn cmd_create_collection(store: &Store, name: &str) -> Result<Collection> {
    store.create_collection(name).await
}

/// Delete a collection (and its documents and chunks) by ID or name
pub async fn cmd_delete_collection(config: &Config, store: &Store, selector: &str) -> Result<()> {
    let collection = super::resolve_collection(config, store, Some(selector)).await?;
    store.delete_collection(&collection.id).await
}

/// List documents in a collection
pub async fn cmd_list_documents(
    config: &Config,
    store: &Store,
    selector: Option<&str>,
) -> Result<Vec<Document>> {
    let collection = super::resolve_collection(config, store, selector).await?;
    store.list_documents(&collection.id).await
}

/// Delete a document (and its chunks) by ID
pub async fn cmd_remove_document(store: &Store, document_id: &str) -> Result<()> {
    store.delete_document(document_id).await
}

/// Print collections to the console
pub fn print_collections(collections: &[Collection]) {
    println!("\nCollections:\n");
    for collection in collections {
        println!("  {} — {}", collection.id, collection.name);
    }
    println!();
}

/// Print documents to the console
pub fn print_documents(documents: &[Document]) {
    if documents.is_empty() {
        println!("\nNo documents.\n");
        return;
    }

    println!("\nDocuments:\n");
    for document in documents {
        println!(
            "  {} — {} ({} chunks, added {})",
            document.id, document.filename, document.chunk_count, document.created_at
        );
    }
    println!();
}
