use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let llm = LlmClient::new(
            config.ai_gateway_api_key.clone(),
            config.ai_gateway_url.clone(),
        );
        Self { llm }
    }
}
