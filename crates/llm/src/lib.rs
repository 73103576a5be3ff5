//! LLM adapter implementations for Quartermaster.
//!
//! Two adapters behind the `LlmAdapter` trait:
//! - [`MockLlm`] — deterministic, offline; parses item details out of the
//!   prompt and fills a fixed sentence template.
//! - [`OpenAiLlm`] — any OpenAI-compatible `/chat/completions` endpoint.
//!
//! Which one runs is decided by the `[llm] provider` config value.

pub mod mock;
pub mod openai;

pub use mock::MockLlm;
pub use openai::OpenAiLlm;

use quartermaster_config::LlmConfig;
use quartermaster_core::error::LlmError;
use quartermaster_core::llm::LlmAdapter;
use std::sync::Arc;

/// Build the adapter named by the configuration.
///
/// `"mock"` needs nothing; `"openai"` requires an API key from the config
/// or the `OPENAI_API_KEY` environment variable. Unknown provider names are
/// rejected rather than silently falling back.
pub fn select_adapter(config: &LlmConfig) -> Result<Arc<dyn LlmAdapter>, LlmError> {
    match config.provider.as_str() {
        "mock" => Ok(Arc::new(MockLlm)),
        "openai" => {
            let api_key = config
                .api_key
                .clone()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .ok_or_else(|| {
                    LlmError::NotConfigured(
                        "API key required for openai. Set [llm] api_key or OPENAI_API_KEY.".into(),
                    )
                })?;
            Ok(Arc::new(OpenAiLlm::new(
                api_key,
                &config.model,
                config.api_url.as_deref(),
            )))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown LLM provider '{other}'. Available: mock, openai."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.into(),
            api_key: None,
            api_url: None,
            model: "gpt-4o-mini".into(),
        }
    }

    #[test]
    fn selects_mock_by_name() {
        let adapter = select_adapter(&config("mock")).unwrap();
        assert_eq!(adapter.name(), "mock");
    }

    #[test]
    fn openai_with_explicit_key() {
        let mut cfg = config("openai");
        cfg.api_key = Some("sk-test".into());
        let adapter = select_adapter(&cfg).unwrap();
        assert_eq!(adapter.name(), "openai");
    }

    #[test]
    fn unknown_provider_rejected() {
        let err = select_adapter(&config("quantum")).unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured(_)));
        assert!(err.to_string().contains("quantum"));
    }
}
