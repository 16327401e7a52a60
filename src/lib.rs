//! archivist — local-first document retrieval and question answering
//!
//! Documents are split into sentence-respecting chunks, embedded with a
//! deterministic hash-projection embedder, and stored in SQLite. Queries
//! are answered by exact cosine search over the stored vectors, with the
//! retrieved chunks grounding a messages-API answer-generation call.

pub mod answer;
pub mod chunk;
pub mod commands;
pub mod config;
pub mod embed;
pub mod error;
pub mod extract;
pub mod rank;
pub mod store;
