//! Custom error types for archivist

use thiserror::Error;

/// Main error type for archivist operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Embedder mismatch: {0}")]
    EmbedderMismatch(String),

    #[error("Data corruption: {0}")]
    Corruption(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Answer generation auth failure: {0}")]
    AnswerAuth(String),

    #[error("Answer generation rate limited: {0}")]
    AnswerRateLimited(String),

    #[error("Answer generation transport failure: {0}")]
    AnswerTransport(#[from] reqwest::Error),

    #[error("Answer generation failed: {0}")]
    AnswerGeneration(String),

    #[error("Not initialized: run 'archivist init' first")]
    NotInitialized,

    #[error("Already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias for archivist
pub type Result<T> = std::result::Result<T, Error>;
