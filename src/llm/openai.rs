//! OpenAI chat-completions client

use crate::error::{Error, Result};
use crate::llm::{CompletionRequest, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Default model used for all analysis stages
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Generation calls get a generous deadline; prompts carry whole files
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Text generator backed by the OpenAI chat-completions API
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiGenerator {
    /// Create a generator against the public OpenAI endpoint
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self::with_base_url(
            api_key,
            model,
            "https://api.openai.com/v1".to_string(),
        )
    }

    /// Create a generator against an explicit base URL
    ///
    /// Used by tests and OpenAI-compatible proxies.
    pub fn with_base_url(api_key: String, model: Option<String>, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.role_instruction },
                { "role": "user", "content": request.prompt }
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(e.to_string())
                } else {
                    Error::Generation(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!("OpenAI API error {status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(Error::Generation("empty completion".to_string()));
        }

        Ok(content)
    }
}
