//! LlmAdapter trait — the abstraction over justification backends.
//!
//! An adapter knows how to turn a prompt into text. The planner calls
//! `generate()` without knowing which backend is wired in — the
//! deterministic mock for tests and offline use, or a real provider
//! selected by configuration.

use crate::error::LlmError;
use async_trait::async_trait;

/// The core LlmAdapter trait.
///
/// Implementations: `MockLlm` (deterministic), `OpenAiLlm` (HTTP). Which one
/// runs is a configuration decision, never a runtime type inspection.
#[async_trait]
pub trait LlmAdapter: Send + Sync + std::fmt::Debug {
    /// A human-readable name for this adapter (e.g., "mock", "openai").
    fn name(&self) -> &str;

    /// Generate a response to the given prompt.
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> std::result::Result<String, LlmError>;

    /// Health check — can we reach the backend?
    async fn health_check(&self) -> std::result::Result<bool, LlmError> {
        Ok(true)
    }
}
