//! Answer generation
//!
//! Retrieval produces context; this module turns context plus a question
//! into prose via a messages-style HTTP API. The capability lives behind a
//! trait so tests (and alternative providers) can substitute their own
//! generator.

use crate::config::AnswerConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Trait for answer generation backends
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate an answer for `query` grounded in `context`
    async fn generate(&self, query: &str, context: &str) -> Result<String>;
}

/// HTTP answer generator speaking the Anthropic messages protocol
pub struct HttpAnswerGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    timeout: Duration,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

impl HttpAnswerGenerator {
    /// Build a generator from config; fails with an auth error when no API
    /// key is present so the problem surfaces before any request is made.
    pub fn new(config: &AnswerConfig, api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::AnswerAuth(format!("API key not set (export {})", config.api_key_env))
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

#[async_trait]
impl AnswerGenerator for HttpAnswerGenerator {
    async fn generate(&self, query: &str, context: &str) -> Result<String> {
        debug!("Requesting answer from {}", self.endpoint);

        let prompt = format!(
            "Answer the question using the provided context. \
             If the answer is not in the context, say so.\n\nContext:\n{}\n\nQuestion: {}",
            context, query
        );

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::AnswerAuth(format!("{}: {}", status, body))
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    Error::AnswerRateLimited(format!("{}: {}", status, body))
                }
                _ => Error::AnswerGeneration(format!("{}: {}", status, body)),
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        let answer = parsed
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text)
            .unwrap_or_default();

        Ok(answer)
    }
}
