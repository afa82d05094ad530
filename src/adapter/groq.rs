use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Url, header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LlmSettings;
use crate::port::{GenerationError, TextGenerator};

/// Fixed user turn sent after the composed prompt.
const USER_TURN: &str = "Suggest movies for me to watch.";
const MAX_ERROR_MESSAGE_LENGTH: usize = 512;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions API (Groq by default).
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    /// The client carries no overall request timeout. The invoker bounds each
    /// invocation and drops the request future when that bound expires, so a
    /// hung backend is reported as a timeout rather than a transport failure.
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout(settings.timeout))
            .build()
            .context("failed to build LLM HTTP client")?;

        // Url::join replaces the last path segment unless the base ends with '/'
        let base = if settings.base_url.ends_with('/') {
            settings.base_url.clone()
        } else {
            format!("{}/", settings.base_url)
        };
        let endpoint = Url::parse(&base)
            .context("invalid LLM base URL")?
            .join("chat/completions")
            .context("failed to build chat completions URL")?;

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt,
                },
                ChatMessage {
                    role: "user",
                    content: USER_TURN,
                },
            ],
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending chat completion request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: truncate_error_message(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GenerationError::Malformed(format!("invalid JSON body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::Malformed("response contained no message content".into()))
    }
}

impl TextGenerator for GroqClient {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Connect timeout, kept below the invocation bound so it cannot race it.
fn connect_timeout(invocation_timeout: Duration) -> Duration {
    CONNECT_TIMEOUT.min(invocation_timeout / 2)
}

fn truncate_error_message(msg: &str) -> String {
    let char_count = msg.chars().count();
    if char_count <= MAX_ERROR_MESSAGE_LENGTH {
        return msg.to_string();
    }
    let truncated: String = msg.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect();
    format!("{truncated}... (truncated, {char_count} chars)")
}
