//! OpenAI-compatible adapter.
//!
//! Works with OpenAI and any endpoint exposing the `/v1/chat/completions`
//! shape (OpenRouter, vLLM, Ollama, ...). Single-turn: one system prompt,
//! one user prompt, one completion.

use async_trait::async_trait;
use quartermaster_core::error::LlmError;
use quartermaster_core::llm::LlmAdapter;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str =
    "You are a procurement expert helping to justify component selection decisions.";

/// An OpenAI-compatible LLM adapter.
#[derive(Debug)]
pub struct OpenAiLlm {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiLlm {
    /// Create a new adapter. `base_url` falls back to the OpenAI endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, base_url: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.into(),
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: model.into(),
            client,
        }
    }
}

#[async_trait]
impl LlmAdapter for OpenAiLlm {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ApiRequest {
            model: self.model.clone(),
            messages: vec![
                ApiMessage {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                ApiMessage {
                    role: "user".into(),
                    content: prompt.into(),
                },
            ],
            max_tokens,
            temperature: 0.7,
        };

        debug!(model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(e.to_string())
                } else {
                    LlmError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(LlmError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(LlmError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(LlmError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| LlmError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::ApiError {
                status_code: 200,
                message: "No choices in response".into(),
            })?;

        Ok(content.trim().to_string())
    }

    async fn health_check(&self) -> Result<bool, LlmError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
