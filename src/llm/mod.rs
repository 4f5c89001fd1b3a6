//! Text-generation boundary
//!
//! One operation: turn a role instruction plus a prompt into generated
//! text. Concrete clients wrap a specific model API; the pipeline only
//! sees the [`TextGenerator`] trait.

mod openai;

pub use openai::{DEFAULT_MODEL, OpenAiGenerator};

use crate::error::Result;
use async_trait::async_trait;

/// A single completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System-level persona instruction for this call
    pub role_instruction: String,
    /// Full prompt text
    pub prompt: String,
    /// Maximum output size in tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Text-generation client
///
/// Fails with [`crate::error::Error::Generation`] on quota, network, or
/// content faults; callers decide whether that is fatal.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
