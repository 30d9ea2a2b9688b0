/// LLM Client — the single point of entry for all model gateway calls in Career Compass.
///
/// ARCHITECTURAL RULE: No other module may call the gateway directly.
/// All LLM interactions MUST go through this module.
///
/// The gateway speaks the OpenAI-style chat-completions protocol, authenticated
/// with a bearer key. Calls are made exactly once: no retries, no caching.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub mod prompts;

/// The model used for all LLM calls in Career Compass.
pub const MODEL: &str = "google/gemini-2.5-flash";
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI Gateway error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by AI Gateway")]
    RateLimited,

    #[error("AI Gateway credits exhausted")]
    QuotaExhausted,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A single chat turn sent upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// The single LLM client used by all relays in Career Compass.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint,
        }
    }

    /// Makes a raw call to the gateway, returning the full completion object.
    /// 429 and 402 are surfaced as their own variants so callers can relay them.
    pub async fn call(&self, messages: &[Message]) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("AI Gateway error: {} {}", status, body);
            return Err(match status.as_u16() {
                429 => LlmError::RateLimited,
                402 => LlmError::QuotaExhausted,
                code => LlmError::Api {
                    status: code,
                    message: body,
                },
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }

    /// Sends a system + user prompt pair and returns the free-text reply.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let messages = [Message::system(system), Message::user(prompt)];
        let completion = self.call(&messages).await?;

        completion
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Finds the first JSON object embedded in free text that deserializes into `T`.
///
/// Every `{` is tried in order; the object must be complete, but anything after
/// its closing brace is ignored. Models routinely wrap JSON in prose or code fences.
pub fn extract_json_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    text.match_indices('{').find_map(|(start, _)| {
        serde_json::Deserializer::from_str(&text[start..])
            .into_iter::<T>()
            .next()
            .and_then(Result::ok)
    })
}
