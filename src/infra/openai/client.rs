use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::CompletionConfig;
use crate::error::{RaterError, Result};
use crate::services::completion_api::CompletionApi;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageContent,
}

#[derive(Deserialize)]
struct ChatMessageContent {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Sends a single user-role message per request with temperature 0, so the
/// service decodes deterministically. Timeouts live here; the pipeline
/// itself configures none.
pub struct OpenAiClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| RaterError::ExternalService(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl CompletionApi for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.0,
        };

        debug!(model = %self.config.model, prompt_len = prompt.len(), "Requesting completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                RaterError::ExternalService(format!("failed to send completion request: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RaterError::ExternalService(format!(
                "completion request returned status {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            RaterError::ExternalService(format!("failed to parse completion response: {e}"))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                RaterError::ExternalService("completion response contained no choices".to_string())
            })?;

        let content = content.trim();
        if content.is_empty() {
            return Err(RaterError::ExternalService(
                "completion was empty".to_string(),
            ));
        }

        Ok(content.to_string())
    }
}
