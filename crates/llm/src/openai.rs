//! OpenAI chat-completions backend.

use async_trait::async_trait;
use serde_json::json;

use crate::provider::{ExplanationProvider, LlmError, Message};

/// Default chat model, matching the service's original deployment.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Build a provider from environment variables.
    ///
    /// | Env Var           | Default                   |
    /// |-------------------|---------------------------|
    /// | `API_KEY`         | (required)                |
    /// | `OPENAI_MODEL`    | `gpt-3.5-turbo`           |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com`  |
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("API_KEY")
            .map_err(|_| LlmError::NotConfigured("API_KEY is not set".into()))?;
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url = std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Ok(Self::new(api_key, model, base_url))
    }
}

#[async_trait]
impl ExplanationProvider for OpenAiProvider {
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": messages,
        });

        tracing::debug!(model = %self.model, message_count = messages.len(), "OpenAI request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        let content = resp["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| LlmError::Parse("missing choices[0].message.content".into()))?
            .to_string();

        Ok(content)
    }
}
