use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::BaseSearchService;
use crate::common::{LeadError, ProviderKind, Result};
use crate::domains::leads::models::{KnowledgeGraph, OrganicResult, SearchContext};

/// Number of organic results kept per search.
pub const MAX_ORGANIC_RESULTS: usize = 3;

const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// SerpAPI client for Google web search
pub struct SerpApiClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

/// SerpAPI response (only the sections we keep)
#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    #[serde(default)]
    knowledge_graph: Option<KnowledgeGraph>,
    /// SerpAPI reports some failures with a 200 and an `error` field
    #[serde(default)]
    error: Option<String>,
}

impl SerpApiClient {
    /// Create a new SerpAPI client
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LeadError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Point the client at a different host (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl BaseSearchService for SerpApiClient {
    async fn search(&self, query: &str) -> Result<SearchContext> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LeadError::provider(ProviderKind::Search, "SERPAPI_API_KEY is not configured")
        })?;

        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[("engine", "google"), ("q", query), ("api_key", api_key)])
            .send()
            .await
            .map_err(|e| {
                LeadError::provider(ProviderKind::Search, format!("SerpAPI request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LeadError::provider_status(
                ProviderKind::Search,
                status.as_u16(),
                body,
            ));
        }

        let serp: SerpResponse = response.json().await.map_err(|e| {
            LeadError::provider(
                ProviderKind::Search,
                format!("Failed to parse SerpAPI response: {e}"),
            )
        })?;

        if let Some(error) = serp.error {
            return Err(LeadError::provider(ProviderKind::Search, error));
        }

        Ok(SearchContext {
            organic_results: serp
                .organic_results
                .into_iter()
                .take(MAX_ORGANIC_RESULTS)
                .collect(),
            knowledge_graph: serp.knowledge_graph,
        })
    }
}
