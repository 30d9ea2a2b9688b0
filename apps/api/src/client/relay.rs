//! Transport between the client controllers and the relay endpoints.
//!
//! Controllers depend only on `RelayClient`; `HttpRelayClient` is the reqwest
//! implementation used against a running API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::chat::{ChatRequest, ChatResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("Relay error (status {status}): {message}")]
    Relay { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// The relay calls the UI controllers make. Implement this to swap transports.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError>;

    async fn chat(&self, message: &str) -> Result<String, ClientError>;
}

/// Talks to the relay endpoints of a Career Compass API over HTTP.
#[derive(Clone)]
pub struct HttpRelayClient {
    client: Client,
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-success response to a typed error, reading the `{error}` body when present.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        warn!("Relay returned {}: {}", status, message);

        match status {
            StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited(message),
            StatusCode::PAYMENT_REQUIRED => ClientError::QuotaExhausted(message),
            _ => ClientError::Relay {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let response = self
            .client
            .post(self.url("/api/v1/analyze-job-readiness"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json().await?)
    }

    async fn chat(&self, message: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/api/v1/career-assistant"))
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.response)
    }
}
