// TestDependencies - mock implementations for testing
//
// Provides mock provider clients that can be injected into ServerDeps for tests.
// Every mock is Clone and shares its state, so a test can keep a handle and
// inspect recorded calls after the pipeline has consumed the other clone.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseBusinessData, BaseSearchService, ServerDeps};
use crate::common::{LeadError, ProviderKind, Result};
use crate::domains::leads::models::{CandidateRecord, SearchContext};

// =============================================================================
// Mock Business Data
// =============================================================================

#[derive(Clone, Default)]
pub struct MockBusinessData {
    responses: Arc<Mutex<Vec<Result<Vec<CandidateRecord>>>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockBusinessData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch
    pub fn with_candidates(self, candidates: Vec<CandidateRecord>) -> Self {
        self.responses.lock().unwrap().push(Ok(candidates));
        self
    }

    /// Queue a failed fetch with the given HTTP status
    pub fn with_failure(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push(Err(LeadError::provider_status(
            ProviderKind::BusinessData,
            status,
            body,
        )));
        self
    }

    /// Number of fetches made
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl BaseBusinessData for MockBusinessData {
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>> {
        *self.calls.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            // No new organizations by default
            Ok(vec![])
        }
    }
}

// =============================================================================
// Mock AI
// =============================================================================

#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<Vec<Result<String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a response wrapping `value` in a ```json fenced block
    pub fn with_fenced_json(self, value: serde_json::Value) -> Self {
        let text = format!("```json\n{}\n```", value);
        self.with_response(text)
    }

    /// Add a generation failure to the queue
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(LeadError::provider(ProviderKind::Generation, message)));
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn generate(&self, prompt: &str) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            // Return default mock response
            Ok("Mock AI response".to_string())
        }
    }
}

// =============================================================================
// Mock Search Service
// =============================================================================

#[derive(Clone, Default)]
pub struct MockSearchService {
    responses: Arc<Mutex<Vec<Result<SearchContext>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(self, context: SearchContext) -> Self {
        self.responses.lock().unwrap().push(Ok(context));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(LeadError::provider(ProviderKind::Search, message)));
        self
    }

    /// All queries searched, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseSearchService for MockSearchService {
    async fn search(&self, query: &str) -> Result<SearchContext> {
        self.queries.lock().unwrap().push(query.to_string());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            // Return empty context by default
            Ok(SearchContext::empty())
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder that assembles mock providers into [`ServerDeps`]
#[derive(Clone, Default)]
pub struct TestDependencies {
    pub business_data: MockBusinessData,
    pub ai: MockAI,
    pub search: MockSearchService,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a mock business-data client
    pub fn mock_business_data(mut self, business_data: MockBusinessData) -> Self {
        self.business_data = business_data;
        self
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = ai;
        self
    }

    /// Set a mock search service
    pub fn mock_search(mut self, search: MockSearchService) -> Self {
        self.search = search;
        self
    }

    /// Convert into ServerDeps for testing. The mocks keep sharing state
    /// with `self`.
    pub fn build_deps(&self) -> ServerDeps {
        ServerDeps::new(
            Arc::new(self.business_data.clone()),
            Arc::new(self.ai.clone()),
            Arc::new(self.search.clone()),
        )
    }
}
