//! Server dependencies for the lead pipeline (using traits for testability)
//!
//! This module provides the central dependency container used by the pipeline.
//! All external services use trait abstractions to enable testing.

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;

use crate::config::Config;
use crate::kernel::{
    BaseAI, BaseBusinessData, BaseSearchService, CrunchbaseClient, GeminiAI, SerpApiClient,
};

// =============================================================================
// ServerDeps
// =============================================================================

/// Provider clients accessible to the pipeline
#[derive(Clone)]
pub struct ServerDeps {
    /// Company records (Crunchbase)
    pub business_data: Arc<dyn BaseBusinessData>,
    /// Text generation (Gemini)
    pub ai: Arc<dyn BaseAI>,
    /// Web search (SerpAPI)
    pub search: Arc<dyn BaseSearchService>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        business_data: Arc<dyn BaseBusinessData>,
        ai: Arc<dyn BaseAI>,
        search: Arc<dyn BaseSearchService>,
    ) -> Self {
        Self {
            business_data,
            ai,
            search,
        }
    }

    /// Build the production provider clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let business_data = CrunchbaseClient::new(
            config.crunchbase_api_key.clone(),
            config.crunchbase_api_url.clone(),
            config.crunchbase_page_size,
        )
        .context("Failed to create Crunchbase client")?;

        let gemini = GeminiClient::new(config.gemini_api_key.clone().unwrap_or_default())
            .context("Failed to create Gemini client")?
            .with_model(&config.gemini_model);

        let search = SerpApiClient::new(config.serpapi_api_key.clone())
            .context("Failed to create SerpAPI client")?;

        Ok(Self::new(
            Arc::new(business_data),
            Arc::new(GeminiAI::new(gemini)),
            Arc::new(search),
        ))
    }
}
