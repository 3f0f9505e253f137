//! LLM provider abstraction layer.
//!
//! This module provides a trait-based abstraction for chat-completion
//! providers, so the analysis pipeline can run against any OpenAI-compatible
//! backend (Groq, OpenAI, a local server) or a fake in tests.

mod openai;
mod provider;
mod types;

pub use openai::{provider_name_for, OpenAIProvider};
pub use provider::{CompletionOptions, LlmError, LlmProvider};
#[cfg(feature = "mock")]
pub use provider::MockLlmProvider;
pub use types::{CompletionResponse, FinishReason, Message, MessageRole, TokenUsage};
