//! Persistent storage using SQLite
//!
//! Collections, documents, and embedded chunks live in one SQLite
//! database. Chunk vectors are stored inline as little-endian f32 blobs;
//! secondary indexes cover the documents-by-collection and
//! chunks-by-document/collection lookups. Deletes cascade child-first
//! inside a single transaction so readers never observe a half-deleted
//! document or collection.

mod schema;

pub use schema::*;

use crate::chunk::chunk_text;
use crate::embed::Embedder;
use crate::error::{Error, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};
use uuid::Uuid;

/// A named namespace grouping documents
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl Collection {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// An ingested document
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub collection_id: String,
    pub filename: String,
    pub content_hash: String,
    pub created_at: String,
    pub chunk_count: i64,
}

/// An embedded chunk row, vector decoded
#[derive(Debug, Clone)]
pub struct ChunkRow {
    pub id: String,
    pub document_id: String,
    pub collection_id: String,
    pub chunk_index: i64,
    pub chunk_text: String,
    pub document_name: String,
    pub vector: Vec<f32>,
}

#[derive(FromRow)]
struct RawChunkRow {
    id: String,
    document_id: String,
    collection_id: String,
    chunk_index: i64,
    chunk_text: String,
    document_name: String,
    vector: Vec<u8>,
}

impl RawChunkRow {
    fn decode(self) -> Result<ChunkRow> {
        Ok(ChunkRow {
            vector: decode_vector(&self.vector, &self.id)?,
            id: self.id,
            document_id: self.document_id,
            collection_id: self.collection_id,
            chunk_index: self.chunk_index,
            chunk_text: self.chunk_text,
            document_name: self.document_name,
        })
    }
}

/// Global statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub collection_count: usize,
    pub document_count: usize,
    pub chunk_count: usize,
}

/// Encode a vector as little-endian f32 bytes
fn encode_vector(vector: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vector.len() * 4);
    for v in vector {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

/// Decode a little-endian f32 blob back into a vector
fn decode_vector(bytes: &[u8], chunk_id: &str) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::Corruption(format!(
            "chunk {} has a vector blob of {} bytes (not a multiple of 4)",
            chunk_id,
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Store handle
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the database at the given path, creating it and the schema if needed
    pub async fn open(db_path: &std::path::Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        debug!("Connecting to SQLite database at {:?}", db_path);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Initialize the database schema
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Verify (or record, on first use) the embedder this store was built with.
    ///
    /// A store only ever holds vectors of one dimensionality produced by one
    /// embedder version. Any mismatch is a hard error directing the user to
    /// re-ingest, never a silent degradation of search results.
    pub async fn register_embedder(&self, embedder: &dyn Embedder) -> Result<()> {
        let stored: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM index_meta ORDER BY key")
                .fetch_all(&self.pool)
                .await?;

        if stored.is_empty() {
            let mut tx = self.pool.begin().await?;
            for (key, value) in [
                ("dimension", embedder.dimension().to_string()),
                ("embedder_name", embedder.name().to_string()),
                ("embedder_version", embedder.version().to_string()),
            ] {
                sqlx::query("INSERT INTO index_meta (key, value) VALUES (?, ?)")
                    .bind(key)
                    .bind(value)
                    .execute(&mut *tx)
                    .await?;
            }
            tx.commit().await?;
            debug!(
                "Registered embedder {} v{} (dimension {})",
                embedder.name(),
                embedder.version(),
                embedder.dimension()
            );
            return Ok(());
        }

        let expected = [
            ("dimension", embedder.dimension().to_string()),
            ("embedder_name", embedder.name().to_string()),
            ("embedder_version", embedder.version().to_string()),
        ];
        for (key, value) in expected {
            let found = stored.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
            if found != Some(value.as_str()) {
                return Err(Error::EmbedderMismatch(format!(
                    "store was built with {} = {}, configured embedder has {}; re-ingest your documents",
                    key,
                    found.unwrap_or("<missing>"),
                    value
                )));
            }
        }
        Ok(())
    }

    // ===== Collection Operations =====

    /// Return the first existing collection, creating a default one if none exist
    pub async fn ensure_default_collection(&self, default_name: &str) -> Result<Collection> {
        if let Some(collection) =
            sqlx::query_as::<_, Collection>("SELECT * FROM collections ORDER BY created_at, id LIMIT 1")
                .fetch_optional(&self.pool)
                .await?
        {
            return Ok(collection);
        }

        let collection = Collection::new(default_name.to_string());
        sqlx::query("INSERT INTO collections (id, name, created_at) VALUES (?, ?, ?)")
            .bind(&collection.id)
            .bind(&collection.name)
            .bind(&collection.created_at)
            .execute(&self.pool)
            .await?;
        info!("Created default collection '{}' ({})", collection.name, collection.id);
        Ok(collection)
    }

    /// Create a new collection
    pub async fn create_collection(&self, name: &str) -> Result<Collection> {
        let collection = Collection::new(name.to_string());
        sqlx::query("INSERT INTO collections (id, name, created_at) VALUES (?, ?, ?)")
            .bind(&collection.id)
            .bind(&collection.name)
            .bind(&collection.created_at)
            .execute(&self.pool)
            .await?;
        Ok(collection)
    }

    /// Get a collection by ID
    pub async fn get_collection(&self, id: &str) -> Result<Option<Collection>> {
        let collection = sqlx::query_as::<_, Collection>("SELECT * FROM collections WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(collection)
    }

    /// Get a collection by name (exact match)
    pub async fn get_collection_by_name(&self, name: &str) -> Result<Option<Collection>> {
        let collection = sqlx::query_as::<_, Collection>("SELECT * FROM collections WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(collection)
    }

    /// List all collections
    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        let collections =
            sqlx::query_as::<_, Collection>("SELECT * FROM collections ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(collections)
    }

    /// Delete a collection, its documents, and all their chunks
    pub async fn delete_collection(&self, id: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Children first, inside one transaction
        sqlx::query("DELETE FROM chunks WHERE collection_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM documents WHERE collection_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM collections WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(Error::CollectionNotFound(id.to_string()));
        }

        tx.commit().await?;
        info!("Deleted collection {}", id);
        Ok(())
    }

    // ===== Document Operations =====

    /// Chunk, embed, and persist a document.
    ///
    /// Chunks are embedded sequentially in order; `on_progress` is invoked
    /// after each chunk with a rounded, monotonically non-decreasing
    /// percentage in 1..=100. The document row and all chunk rows commit in
    /// one transaction, so a failure mid-ingestion leaves no partial state.
    /// Content that yields zero chunks still creates the document with
    /// `chunk_count` 0. Re-ingesting the same filename always creates a new
    /// document with a fresh ID.
    pub async fn save_document<F>(
        &self,
        embedder: &dyn Embedder,
        max_chunk_chars: usize,
        collection_id: &str,
        filename: &str,
        content: &str,
        mut on_progress: Option<F>,
    ) -> Result<Document>
    where
        F: FnMut(u8),
    {
        if self.get_collection(collection_id).await?.is_none() {
            return Err(Error::CollectionNotFound(collection_id.to_string()));
        }

        self.register_embedder(embedder).await?;

        let chunks = chunk_text(content, max_chunk_chars);
        let total = chunks.len();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            collection_id: collection_id.to_string(),
            filename: filename.to_string(),
            content_hash: blake3::hash(content.as_bytes()).to_hex().to_string(),
            created_at: Utc::now().to_rfc3339(),
            chunk_count: total as i64,
        };
        debug!("Ingesting '{}': {} chunks", filename, total);

        let mut tx = self.pool.begin().await?;

        // Parent row first: chunks.document_id carries a foreign key
        sqlx::query(
            r#"
            INSERT INTO documents (id, collection_id, filename, content_hash, created_at, chunk_count)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&document.id)
        .bind(&document.collection_id)
        .bind(&document.filename)
        .bind(&document.content_hash)
        .bind(&document.created_at)
        .bind(document.chunk_count)
        .execute(&mut *tx)
        .await?;

        for (index, text) in chunks.iter().enumerate() {
            let vector = embedder
                .embed(vec![text.clone()])
                .await?
                .pop()
                .ok_or_else(|| Error::Embedding("no embedding returned".to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO chunks (id, document_id, collection_id, chunk_index, chunk_text, document_name, vector)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(format!("{}-{}", document.id, index))
            .bind(&document.id)
            .bind(collection_id)
            .bind(index as i64)
            .bind(text)
            .bind(filename)
            .bind(encode_vector(&vector))
            .execute(&mut *tx)
            .await?;

            if let Some(progress) = on_progress.as_mut() {
                // Rounded percent, clamped to 1..=100 even past 100 chunks
                let percent = ((index + 1) as f64 / total as f64 * 100.0).round() as u32;
                progress(percent.clamp(1, 100) as u8);
            }
        }

        tx.commit().await?;
        info!("Saved document '{}' with {} chunks", filename, total);
        Ok(document)
    }

    /// Get a document by ID
    pub async fn get_document(&self, id: &str) -> Result<Option<Document>> {
        let document = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(document)
    }

    /// List documents in a collection
    pub async fn list_documents(&self, collection_id: &str) -> Result<Vec<Document>> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE collection_id = ? ORDER BY created_at",
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }

    /// Delete a document and all its chunks
    pub async fn delete_document(&self, id: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM chunks WHERE document_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(Error::DocumentNotFound(id.to_string()));
        }

        tx.commit().await?;
        info!("Deleted document {}", id);
        Ok(())
    }

    // ===== Chunk Operations =====

    /// Get a document's chunks in order
    pub async fn chunks_by_document(&self, document_id: &str) -> Result<Vec<ChunkRow>> {
        let rows = sqlx::query_as::<_, RawChunkRow>(
            "SELECT * FROM chunks WHERE document_id = ? ORDER BY chunk_index",
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(RawChunkRow::decode).collect()
    }

    /// Get all chunks in a collection
    pub async fn chunks_by_collection(&self, collection_id: &str) -> Result<Vec<ChunkRow>> {
        let rows = sqlx::query_as::<_, RawChunkRow>(
            "SELECT * FROM chunks WHERE collection_id = ? ORDER BY rowid",
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(RawChunkRow::decode).collect()
    }

    /// Get every chunk in the store
    pub async fn all_chunks(&self) -> Result<Vec<ChunkRow>> {
        let rows = sqlx::query_as::<_, RawChunkRow>("SELECT * FROM chunks ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(RawChunkRow::decode).collect()
    }

    // ===== Statistics =====

    /// Get global statistics
    pub async fn stats(&self) -> Result<StoreStats> {
        let collection_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM collections")
            .fetch_one(&self.pool)
            .await?;
        let document_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await?;
        let chunk_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chunks")
            .fetch_one(&self.pool)
            .await?;

        Ok(StoreStats {
            collection_count: collection_count as usize,
            document_count: document_count as usize,
            chunk_count: chunk_count as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::HashEmbedder;
    use tempfile::TempDir;

    async fn setup() -> (Store, TempDir) {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(&tmp.path().join("test.db")).await.unwrap();
        (store, tmp)
    }

    fn embedder() -> HashEmbedder {
        HashEmbedder::new(128, 8192)
    }

    #[tokio::test]
    async fn test_ensure_default_collection_idempotent() {
        let (store, _tmp) = setup().await;

        let first = store.ensure_default_collection("Personal Library").await.unwrap();
        assert_eq!(first.name, "Personal Library");

        let second = store.ensure_default_collection("Personal Library").await.unwrap();
        assert_eq!(first.id, second.id);

        let collections = store.list_collections().await.unwrap();
        assert_eq!(collections.len(), 1);
    }

    #[tokio::test]
    async fn test_collection_crud() {
        let (store, _tmp) = setup().await;

        let collection = store.create_collection("Research").await.unwrap();
        let loaded = store.get_collection(&collection.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Research");

        let by_name = store.get_collection_by_name("Research").await.unwrap().unwrap();
        assert_eq!(by_name.id, collection.id);

        store.delete_collection(&collection.id).await.unwrap();
        assert!(store.get_collection(&collection.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_document_chunk_count_and_order() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        let content = "First sentence here. Second sentence here. Third sentence here.";
        let doc = store
            .save_document(&e, 25, &collection.id, "notes.txt", content, None::<fn(u8)>)
            .await
            .unwrap();

        assert_eq!(doc.chunk_count, 3);

        let chunks = store.chunks_by_document(&doc.id).await.unwrap();
        assert_eq!(chunks.len(), 3);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i as i64);
            assert_eq!(chunk.id, format!("{}-{}", doc.id, i));
            assert_eq!(chunk.document_name, "notes.txt");
            assert_eq!(chunk.vector.len(), 128);
        }
    }

    #[tokio::test]
    async fn test_save_single_sentence_with_foreign_keys_enforced() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();

        // Orphan chunk rows are rejected, so the parent document row has
        // to land before its chunks within the ingestion transaction
        let orphan = sqlx::query(
            "INSERT INTO chunks (id, document_id, collection_id, chunk_index, chunk_text, document_name, vector)
             VALUES ('x-0', 'no-such-doc', ?, 0, 't', 'x.txt', x'00000000')",
        )
        .bind(&collection.id)
        .execute(&store.pool)
        .await;
        assert!(orphan.is_err());

        let doc = store
            .save_document(&embedder(), 900, &collection.id, "one.txt", "One sentence.", None::<fn(u8)>)
            .await
            .unwrap();
        assert_eq!(doc.chunk_count, 1);
        assert_eq!(store.chunks_by_document(&doc.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_document_progress_rounded() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();

        let mut reported: Vec<u8> = Vec::new();
        store
            .save_document(
                &embedder(),
                12,
                &collection.id,
                "r.txt",
                "One one one. Two two two. Three three.",
                Some(|p: u8| reported.push(p)),
            )
            .await
            .unwrap();

        // 1/3 and 2/3 round to the nearest percent
        assert_eq!(reported, vec![33, 67, 100]);
    }

    #[tokio::test]
    async fn test_save_document_progress_monotone() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        let content = "One one. Two two. Three three. Four four. Five five.";
        let mut reported: Vec<u8> = Vec::new();
        store
            .save_document(&e, 10, &collection.id, "p.txt", content, Some(|p: u8| reported.push(p)))
            .await
            .unwrap();

        assert!(!reported.is_empty());
        assert_eq!(*reported.last().unwrap(), 100);
        for pair in reported.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(reported.iter().all(|&p| (1..=100).contains(&p)));
    }

    #[tokio::test]
    async fn test_empty_content_creates_zero_chunk_document() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        let doc = store
            .save_document(&e, 900, &collection.id, "empty.txt", "   ", None::<fn(u8)>)
            .await
            .unwrap();

        assert_eq!(doc.chunk_count, 0);
        assert!(store.chunks_by_document(&doc.id).await.unwrap().is_empty());
        assert!(store.get_document(&doc.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_reingest_same_filename_duplicates() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        let a = store
            .save_document(&e, 900, &collection.id, "same.txt", "Hello there.", None::<fn(u8)>)
            .await
            .unwrap();
        let b = store
            .save_document(&e, 900, &collection.id, "same.txt", "Hello there.", None::<fn(u8)>)
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.content_hash, b.content_hash);
        assert_eq!(store.list_documents(&collection.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_document_cascades() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        let doc = store
            .save_document(&e, 20, &collection.id, "d.txt", "One one one. Two two two.", None::<fn(u8)>)
            .await
            .unwrap();
        assert!(!store.chunks_by_document(&doc.id).await.unwrap().is_empty());

        store.delete_document(&doc.id).await.unwrap();

        assert!(store.chunks_by_document(&doc.id).await.unwrap().is_empty());
        assert!(store.get_document(&doc.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_collection_cascades() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        store
            .save_document(&e, 900, &collection.id, "a.txt", "Alpha beta.", None::<fn(u8)>)
            .await
            .unwrap();
        store
            .save_document(&e, 900, &collection.id, "b.txt", "Gamma delta.", None::<fn(u8)>)
            .await
            .unwrap();

        store.delete_collection(&collection.id).await.unwrap();

        assert!(store.list_documents(&collection.id).await.unwrap().is_empty());
        assert!(store.chunks_by_collection(&collection.id).await.unwrap().is_empty());
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.document_count, 0);
        assert_eq!(stats.chunk_count, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (store, _tmp) = setup().await;

        assert!(matches!(
            store.delete_document("nope").await,
            Err(Error::DocumentNotFound(_))
        ));
        assert!(matches!(
            store.delete_collection("nope").await,
            Err(Error::CollectionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_save_into_missing_collection_fails() {
        let (store, _tmp) = setup().await;
        let e = embedder();

        let result = store
            .save_document(&e, 900, "missing", "x.txt", "Text.", None::<fn(u8)>)
            .await;
        assert!(matches!(result, Err(Error::CollectionNotFound(_))));
    }

    #[tokio::test]
    async fn test_embedder_mismatch_rejected() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();

        store
            .save_document(&embedder(), 900, &collection.id, "a.txt", "Text here.", None::<fn(u8)>)
            .await
            .unwrap();

        // Same algorithm, different dimension
        let other = HashEmbedder::new(64, 8192);
        let result = store.register_embedder(&other).await;
        assert!(matches!(result, Err(Error::EmbedderMismatch(_))));
    }

    #[tokio::test]
    async fn test_vector_roundtrip() {
        let (store, _tmp) = setup().await;
        let collection = store.create_collection("Docs").await.unwrap();
        let e = embedder();

        store
            .save_document(&e, 900, &collection.id, "v.txt", "The cat sat.", None::<fn(u8)>)
            .await
            .unwrap();

        let chunks = store.chunks_by_collection(&collection.id).await.unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].vector, e.embed_text("The cat sat."));
    }

    #[test]
    fn test_vector_codec() {
        let vector = vec![1.0f32, -0.5, 0.0, 3.25];
        let decoded = decode_vector(&encode_vector(&vector), "c").unwrap();
        assert_eq!(vector, decoded);

        assert!(matches!(
            decode_vector(&[1, 2, 3], "c"),
            Err(Error::Corruption(_))
        ));
    }
}
