// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (prompting, fallbacks, accumulation) lives in domains/leads.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseSearchService)

use async_trait::async_trait;

use crate::common::Result;
use crate::domains::leads::models::{CandidateRecord, SearchContext};

// =============================================================================
// Business Data Trait (Infrastructure - company records)
// =============================================================================

#[async_trait]
pub trait BaseBusinessData: Send + Sync {
    /// Fetch one bounded page of the most recently created organizations.
    ///
    /// Never retries; a failure is a `ProviderKind::BusinessData` error.
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>>;
}

// =============================================================================
// AI Trait (Infrastructure - text generation)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Single blocking round trip: prompt in, raw generated text out.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Search Service Trait (Infrastructure - web search)
// =============================================================================

#[async_trait]
pub trait BaseSearchService: Send + Sync {
    /// Search the web for `query`, returning the top results and knowledge panel.
    async fn search(&self, query: &str) -> Result<SearchContext>;
}
