//! SQLite schema definition

/// SQL schema for the archivist database
pub const SCHEMA_SQL: &str = r#"
-- Collections: named namespaces grouping documents
CREATE TABLE IF NOT EXISTS collections (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Documents: ingested files
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    collection_id TEXT NOT NULL REFERENCES collections(id),
    filename TEXT NOT NULL,
    content_hash TEXT NOT NULL,
    created_at TEXT NOT NULL,
    chunk_count INTEGER NOT NULL
);

-- Chunks: embedded text segments, vector stored as little-endian f32 bytes
CREATE TABLE IF NOT EXISTS chunks (
    id TEXT PRIMARY KEY,
    document_id TEXT NOT NULL REFERENCES documents(id),
    collection_id TEXT NOT NULL REFERENCES collections(id),
    chunk_index INTEGER NOT NULL,
    chunk_text TEXT NOT NULL,
    document_name TEXT NOT NULL,
    vector BLOB NOT NULL,
    UNIQUE(document_id, chunk_index)
);

-- Embedder bookkeeping so an algorithm or dimension change is detected
-- instead of silently mixing incompatible vectors
CREATE TABLE IF NOT EXISTS index_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Secondary indexes
CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection_id);
CREATE INDEX IF NOT EXISTS idx_chunks_document ON chunks(document_id);
CREATE INDEX IF NOT EXISTS idx_chunks_collection ON chunks(collection_id);
"#;
