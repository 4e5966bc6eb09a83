//! Test fixtures for provider responses.

use lead_core::domains::leads::models::{
    CandidateRecord, KnowledgeGraph, OrganicResult, SearchContext,
};
use serde_json::{json, Value};

/// Candidate with just a name and description
pub fn candidate(name: &str, description: &str) -> CandidateRecord {
    CandidateRecord::new(name).with_description(description)
}

/// A well-formed enrichment payload
pub fn enrichment_json(description: &str, industry: &str) -> Value {
    json!({
        "description": description,
        "industry": industry,
    })
}

/// Search context with a single organic result and a knowledge panel
pub fn search_context_for(company: &str) -> SearchContext {
    SearchContext {
        organic_results: vec![OrganicResult {
            title: format!("{company} - Home"),
            link: format!("https://{}.example", company.to_lowercase()),
            snippet: format!("{company} official site"),
            position: Some(1),
        }],
        knowledge_graph: Some(KnowledgeGraph {
            title: Some(company.to_string()),
            entity_type: Some("Company".to_string()),
            description: None,
            website: None,
        }),
    }
}
