//! Career assistant chat relay.
//!
//! Stateless: each message is forwarded on its own with the assistant's system
//! prompt, and the reply text is relayed back verbatim.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::prompts::CAREER_ASSISTANT_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Body of `POST /api/v1/career-assistant`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Forwards one user message to the gateway and returns the assistant's reply.
pub async fn ask_career_assistant(message: &str, llm: &LlmClient) -> Result<String, AppError> {
    info!("Career assistant question ({} chars)", message.len());
    let reply = llm.complete(CAREER_ASSISTANT_SYSTEM, message).await?;
    Ok(reply)
}
