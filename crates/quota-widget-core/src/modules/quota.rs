//! Quota fetching against the `fetchAvailableModels` endpoint.

use async_trait::async_trait;
use quota_widget_types::{AppConfig, QuotaPayload, QuotaResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::utils::http::create_client;

/// Longest response body kept in an `AppError::Http`.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Anything that can produce the per-model quota map for a token.
#[async_trait]
pub trait QuotaSource: Send + Sync {
    async fn fetch_models(&self, access_token: &str) -> AppResult<QuotaPayload>;
}

#[derive(Debug, Clone)]
pub struct QuotaClient {
    client: reqwest::Client,
    api_url: String,
}

impl QuotaClient {
    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        let client = create_client(timeout_secs).map_err(AppError::Unknown)?;
        Ok(Self { client, api_url: api_url.into() })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(config.api_url.clone(), config.request_timeout_secs)
    }
}

#[async_trait]
impl QuotaSource for QuotaClient {
    /// Only a 200 counts as success; any other status is `AppError::Http`,
    /// transport and body-decoding failures are `AppError::Network`.
    async fn fetch_models(&self, access_token: &str) -> AppResult<QuotaPayload> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(access_token)
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({}))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            let body: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            tracing::warn!("[QuotaClient] API error: {} - {}", status, body);
            return Err(AppError::Http { status: status.as_u16(), body });
        }

        let quota_response: QuotaResponse = response.json().await?;
        tracing::debug!("[QuotaClient] Quota API returned {} models", quota_response.models.len());

        Ok(quota_response.into_payload())
    }
}
