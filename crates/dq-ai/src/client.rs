//! Completion service client
//!
//! Wraps a single call against an OpenAI-compatible chat-completions
//! endpoint: rendered prompt in, generated text out. The upstream
//! contract only guarantees text, so nothing beyond the first choice's
//! content is modeled. Failures propagate immediately - no retries.

use crate::error::{AiError, AiResult};
use async_trait::async_trait;
use dq_core::AiConfig;
use serde::{Deserialize, Serialize};

/// Text-completion abstraction used by both analysis pipelines
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one rendered prompt and return the generated text
    async fn complete(&self, prompt: &str) -> AiResult<String>;
}

/// Client for OpenAI-compatible chat-completion APIs.
///
/// All connection and model parameters come from the [`AiConfig`]
/// handed to the constructor; nothing is read from ambient state.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl OpenAiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> AiResult<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut builder = self.http.post(&url).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AiError::Completion(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Completion(format!(
                "completion service returned {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::Completion(format!("malformed completion response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AiError::Completion("completion service returned no usable content".to_string())
            })
    }
}
