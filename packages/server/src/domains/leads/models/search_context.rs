use serde::{Deserialize, Serialize};

/// Best-effort web search context attached to a lead after enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchContext {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,
}

impl SearchContext {
    /// Context used when the search provider failed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.organic_results.is_empty() && self.knowledge_graph.is_none()
    }
}

/// One organic search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Knowledge-panel summary for the searched entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        assert!(SearchContext::empty().is_empty());

        let ctx = SearchContext {
            organic_results: vec![OrganicResult::default()],
            knowledge_graph: None,
        };
        assert!(!ctx.is_empty());
    }

    #[test]
    fn test_knowledge_graph_type_field() {
        let kg: KnowledgeGraph =
            serde_json::from_str(r#"{"title": "Acme", "type": "Company"}"#).unwrap();
        assert_eq!(kg.entity_type.as_deref(), Some("Company"));

        let json = serde_json::to_value(&kg).unwrap();
        assert_eq!(json["type"], "Company");
    }
}
