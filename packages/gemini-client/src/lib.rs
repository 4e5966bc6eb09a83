//! Pure Gemini REST API client
//!
//! A minimal client for the Gemini `generateContent` endpoint with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerationConfig};
//!
//! let client = GeminiClient::from_env()?.with_model("gemini-1.5-flash");
//!
//! let text = client
//!     .generate_text("Describe Rust in one sentence.", GenerationConfig::default())
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Transport timeout for a single `generateContent` round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GeminiError::Config(format!("Failed to create HTTP client: {e}")))
}

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key and the default
    /// transport timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(DEFAULT_TIMEOUT)?,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Self::new(api_key)
    }

    /// Replace the transport timeout applied to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = build_http_client(timeout)?;
        Ok(self)
    }

    /// Set a custom base URL (for proxies or tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model used for every call.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Raw `generateContent` call.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        if self.api_key.is_empty() {
            return Err(GeminiError::Config("Gemini API key is empty".into()));
        }

        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generateContent"
        );

        Ok(parsed)
    }

    /// Single-turn text generation.
    ///
    /// Returns the text of the first candidate's first part.
    pub async fn generate_text(
        &self,
        prompt: impl Into<String>,
        config: GenerationConfig,
    ) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt).config(config);
        let response = self.generate_content(&request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| GeminiError::Parse("No text candidate in Gemini response".into()))
    }
}
