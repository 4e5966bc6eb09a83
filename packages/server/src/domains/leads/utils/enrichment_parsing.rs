//! Pure helpers for the enrichment prompt and its response.
//!
//! No I/O here: the prompt is a fixed template and the parser only looks at
//! the text it is given, so the soft-fallback path can be tested on its own.

use serde::Deserialize;

use crate::common::{LeadError, Result};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Structured enrichment extracted from generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub description: String,
    pub industry: String,
}

#[derive(Debug, Deserialize)]
struct RawEnrichment {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    industry: Option<String>,
}

/// Fixed prompt asking for a fenced JSON object with `description` and `industry`.
pub fn build_enrichment_prompt(company_name: &str, description: &str) -> String {
    format!(
        r#"Based on this company's name and description, provide industry analysis in JSON format.
Company: {company_name}
Description: {description}

Respond with a single ```json fenced code block containing exactly this object:
{{
    "description": "Brief description of what the company does",
    "industry": "Primary industry category"
}}"#
    )
}

/// Body of the first ```` ```json ```` fenced block, trimmed.
pub fn extract_fenced_json(response: &str) -> Option<&str> {
    let start = response.find(JSON_FENCE)? + JSON_FENCE.len();
    let rest = &response[start..];
    let end = rest.find(FENCE)?;
    Some(rest[..end].trim())
}

/// Parse generated text into an [`Enrichment`].
///
/// Fails with [`LeadError::Parse`] when there is no fenced block, the block is
/// unterminated, or its body is not a JSON object of strings. A missing
/// `description` or `industry` field becomes an empty string.
pub fn parse_enrichment_response(response: &str) -> Result<Enrichment> {
    let json = extract_fenced_json(response)
        .ok_or_else(|| LeadError::parse("no ```json fenced block in response"))?;

    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| LeadError::parse(format!("invalid enrichment JSON: {e}")))?;
    if !value.is_object() {
        return Err(LeadError::parse("enrichment JSON is not an object"));
    }

    let raw: RawEnrichment = serde_json::from_value(value)
        .map_err(|e| LeadError::parse(format!("invalid enrichment JSON: {e}")))?;

    Ok(Enrichment {
        description: raw.description.unwrap_or_default(),
        industry: raw.industry.unwrap_or_default(),
    })
}
