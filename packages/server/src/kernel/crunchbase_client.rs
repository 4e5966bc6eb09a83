use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::BaseBusinessData;
use crate::common::{LeadError, ProviderKind, Result};
use crate::domains::leads::models::CandidateRecord;

const FIELD_IDS: [&str; 3] = ["name", "website_url", "short_description"];

/// Crunchbase search API client for recently created organizations
pub struct CrunchbaseClient {
    api_key: Option<String>,
    api_url: Option<String>,
    page_size: usize,
    client: reqwest::Client,
}

/// Crunchbase search request
#[derive(Debug, Serialize)]
struct SearchRequest {
    field_ids: Vec<&'static str>,
    order: Vec<SortOrder>,
    limit: usize,
}

#[derive(Debug, Serialize)]
struct SortOrder {
    field_id: &'static str,
    sort: &'static str,
}

/// Crunchbase search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    website_url: Option<String>,
    #[serde(default)]
    short_description: Option<String>,
}

impl From<Entity> for CandidateRecord {
    fn from(entity: Entity) -> Self {
        let props = entity.properties;
        Self {
            name: props.name.unwrap_or_default(),
            website: props.website_url,
            description: props.short_description,
        }
    }
}

impl CrunchbaseClient {
    /// Create a new Crunchbase client. Missing credentials are reported on
    /// the first fetch, not here.
    pub fn new(api_key: Option<String>, api_url: Option<String>, page_size: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LeadError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            api_url,
            page_size,
            client,
        })
    }

    fn request_body(&self) -> SearchRequest {
        SearchRequest {
            field_ids: FIELD_IDS.to_vec(),
            order: vec![SortOrder {
                field_id: "created_at",
                sort: "desc",
            }],
            limit: self.page_size,
        }
    }
}

#[async_trait]
impl BaseBusinessData for CrunchbaseClient {
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>> {
        let url = self.api_url.as_deref().ok_or_else(|| {
            LeadError::provider(ProviderKind::BusinessData, "CRUNCHBASE_API_URL is not configured")
        })?;

        let body = self.request_body();
        tracing::info!(limit = body.limit, "Sending request to Crunchbase API");

        let mut request = self
            .client
            .post(url)
            .header("accept", "application/json")
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("x-cb-user-key", key);
        }

        let response = request.send().await.map_err(|e| {
            LeadError::provider(
                ProviderKind::BusinessData,
                format!("Crunchbase request failed: {e}"),
            )
        })?;

        let status = response.status();
        tracing::info!(status = %status, "Crunchbase API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LeadError::provider_status(
                ProviderKind::BusinessData,
                status.as_u16(),
                body,
            ));
        }

        let parsed: SearchResponse = response.json().await.map_err(|e| {
            LeadError::provider(
                ProviderKind::BusinessData,
                format!("Failed to parse Crunchbase response: {e}"),
            )
        })?;

        tracing::info!(
            count = parsed.entities.len(),
            "Retrieved organizations from Crunchbase"
        );

        Ok(parsed.entities.into_iter().map(CandidateRecord::from).collect())
    }
}
