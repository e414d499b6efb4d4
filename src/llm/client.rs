use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_content(&self, request: PromptRequest) -> Result<GenerateResponse>;
}

/// Client for the Gemini `generateContent` REST endpoint. One request per
/// call, no retries.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::llm(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(&self, request: PromptRequest) -> Result<GenerateResponse> {
        debug!(
            "Sending {} prompt characters to model {}",
            request.prompt.chars().count(),
            request.model
        );

        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request.to_wire())
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ApiErrorEnvelope>(&bytes) {
                Ok(envelope) => envelope.error.message,
                Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
            };
            return Err(Error::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        debug!(
            "Received {} candidates from model {}",
            body.candidates.len(),
            request.model
        );

        Ok(GenerateResponse {
            text: body.text(),
            finish_reason: body.finish_reason(),
            model: body.model_version.unwrap_or(request.model),
        })
    }
}
