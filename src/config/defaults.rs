//! Default values for configuration

/// Default vector dimension for the hash embedder
pub fn default_embedding_dimension() -> usize {
    128
}

/// Default bound on embedder input, in characters
pub fn default_embedding_max_input_chars() -> usize {
    8192
}

/// Default maximum characters per chunk
pub fn default_chunk_max_chars() -> usize {
    900
}

/// Default number of chunks retrieved for answer generation
pub fn default_ask_k() -> usize {
    3
}

/// Default number of results for retrieval-only queries
pub fn default_query_k() -> usize {
    5
}

/// Default answer API endpoint
pub fn default_answer_endpoint() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

/// Default answer model identifier
pub fn default_answer_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

/// Default environment variable name for the answer API key
pub fn default_answer_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

/// Default maximum tokens for a generated answer
pub fn default_answer_max_tokens() -> u32 {
    1500
}

/// Default answer request timeout in seconds
pub fn default_answer_timeout_secs() -> u64 {
    60
}

/// Default name for the lazily created collection
pub fn default_collection_name() -> String {
    "Personal Library".to_string()
}
