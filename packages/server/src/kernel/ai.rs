// AI implementation using Gemini
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError, GenerationConfig};

use super::BaseAI;
use crate::common::utils::preview;
use crate::common::{LeadError, ProviderKind, Result};

/// Gemini implementation of AI capabilities
#[derive(Clone)]
pub struct GeminiAI {
    client: GeminiClient,
    config: GenerationConfig,
}

impl GeminiAI {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }
}

impl From<GeminiError> for LeadError {
    fn from(err: GeminiError) -> Self {
        match err.status() {
            Some(status) => LeadError::provider_status(ProviderKind::Generation, status, err.to_string()),
            None => LeadError::provider(ProviderKind::Generation, err.to_string()),
        }
    }
}

#[async_trait]
impl BaseAI for GeminiAI {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::info!(model = self.client.model(), "Calling Gemini API");

        let text = self
            .client
            .generate_text(prompt, self.config.clone())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = self.client.model(),
                    prompt_preview = %preview(prompt, 200),
                    "Gemini API call failed"
                );
                LeadError::from(e)
            })?;

        tracing::debug!(response_length = text.len(), "Gemini API response received");

        Ok(text)
    }
}
