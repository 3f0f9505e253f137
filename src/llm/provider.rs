//! LLM provider trait definition.

use super::types::{CompletionResponse, Message};
use std::time::Duration;
use thiserror::Error;

/// Options for a completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Sequences that end generation.
    pub stop: Vec<String>,
    /// Request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: Some(50),
            stop: vec!["\n".to_string(), " \n".to_string()],
            timeout: None,
        }
    }
}

/// Errors that can occur when interacting with an LLM provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Bağlantı hatası: {0}")]
    Connection(String),

    #[error("API hatası (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Geçersiz yanıt: {0}")]
    InvalidResponse(String),

    #[error("İstek sınırı aşıldı")]
    RateLimited,

    #[error("İstek zaman aşımına uğradı")]
    Timeout,
}

/// Trait for LLM providers.
///
/// Calls block until the provider answers; the pipeline is strictly
/// sequential.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LlmProvider {
    /// Get the provider's name (e.g., "openai").
    fn name(&self) -> &str;

    /// Get the model being used.
    fn model(&self) -> &str;

    /// Complete a conversation.
    fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError>;
}
