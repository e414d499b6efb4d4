//! Prompt dispatch: the one place that talks to the text-generation provider.
//!
//! [`PromptGateway::generate`] validates the prompt, picks a model, makes a
//! single provider call and folds every result into a [`GenerationOutcome`].
//! Provider errors never escape as `Err`; callers only see outcome values.

mod outcome;

pub use outcome::{FailureKind, GenerationOutcome};

use crate::{
    config::LlmConfig,
    llm::{GenerationConfig, LlmClient, PromptRequest},
};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const EMPTY_PROMPT_MESSAGE: &str = "empty prompt";

pub struct PromptGateway {
    client: Arc<dyn LlmClient>,
    default_model: String,
    apology: String,
    expose_provider_errors: bool,
}

impl PromptGateway {
    pub fn new(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            default_model: config.models.base.clone(),
            apology: config.apology.clone(),
            expose_provider_errors: config.expose_provider_errors,
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub async fn generate(
        &self,
        prompt: &str,
        model: Option<&str>,
        generation_config: Option<GenerationConfig>,
    ) -> GenerationOutcome {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return GenerationOutcome::failure(FailureKind::InvalidInput, EMPTY_PROMPT_MESSAGE);
        }

        if let Some(config) = &generation_config {
            if let Err(e) = config.validate() {
                return GenerationOutcome::failure(FailureKind::InvalidInput, e.to_string());
            }
        }

        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.default_model);

        let request = PromptRequest {
            prompt: prompt.to_string(),
            model: model.to_string(),
            generation_config,
        };

        debug!("Dispatching prompt to model {}", model);

        match self.client.generate_content(request).await {
            Ok(response) => match response.text.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => GenerationOutcome::success(text),
                _ => {
                    warn!(
                        "Model {} returned no text (finish reason: {:?})",
                        model, response.finish_reason
                    );
                    GenerationOutcome::failure(
                        FailureKind::EmptyResponse,
                        self.user_message("empty response from provider"),
                    )
                }
            },
            Err(e) => {
                error!("Provider call to model {} failed: {}", model, e);
                GenerationOutcome::failure(
                    FailureKind::ProviderError,
                    self.user_message(&e.to_string()),
                )
            }
        }
    }

    fn user_message(&self, detail: &str) -> String {
        if self.expose_provider_errors {
            format!("Error: {detail}")
        } else {
            self.apology.clone()
        }
    }
}
