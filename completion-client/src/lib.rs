//! # Completion client
//!
//! Defines the [`CompletionClient`] trait and an OpenAI-backed
//! implementation. The trait is the seam the update handler mocks in tests.
//!
//! Failures are explicit: the client returns [`CompletionError`] and never
//! swallows an upstream problem; converting that into a user-facing fallback
//! is the caller's decision.

use async_trait::async_trait;
use thiserror::Error;

mod openai;

pub use openai::OpenAiCompletionClient;

/// Errors from one completion round trip.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion API request failed")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("completion response contained no choices")]
    NoChoices,
}

/// One-shot text completion: the prompt goes out as the sole user-role
/// message and the first returned choice's text comes back.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" +
/// last 4 chars. If length <= 11, returns "***" to avoid leaking any part
/// of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
