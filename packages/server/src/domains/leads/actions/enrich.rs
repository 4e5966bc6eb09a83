use tracing::{info, warn};

use crate::common::{LeadError, ProviderKind};
use crate::domains::leads::models::Lead;
use crate::domains::leads::store::LeadStore;
use crate::domains::leads::utils::{build_enrichment_prompt, parse_enrichment_response};
use crate::kernel::BaseAI;

/// Industry used when generated text could not be parsed.
pub const UNKNOWN_INDUSTRY: &str = "Unknown";

/// Enrich a lead with a generated description and industry.
///
/// Total: always returns an enriched lead.
/// - parsed response → description/industry from the model
/// - unparsable response (soft fallback) → raw text as description, industry "Unknown"
/// - no name, failed or empty generation (hard fallback) → existing description
///
/// Generation and parse failures are recorded in `store`.
pub async fn enrich_lead(mut lead: Lead, ai: &dyn BaseAI, store: &LeadStore) -> Lead {
    if lead.is_enriched() {
        return lead;
    }

    if lead.company_name().trim().is_empty() {
        return hard_fallback(lead);
    }

    let prompt = build_enrichment_prompt(lead.company_name(), lead.description());

    let text = match ai.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            let err = LeadError::provider(ProviderKind::Generation, "empty response");
            store
                .record_error(format!("Enrichment error for {}", lead.company_name()), &err)
                .await;
            return hard_fallback(lead);
        }
        Err(e) => {
            store
                .record_error(format!("Enrichment error for {}", lead.company_name()), &e)
                .await;
            return hard_fallback(lead);
        }
    };

    match parse_enrichment_response(&text) {
        Ok(enrichment) => {
            lead.mark_enriched(&enrichment.description, enrichment.industry);
            info!(company = lead.company_name(), "Successfully enriched lead");
        }
        Err(e) => {
            store
                .record_error(
                    format!("Error parsing response for {}", lead.company_name()),
                    &e,
                )
                .await;
            lead.mark_enriched(&text, UNKNOWN_INDUSTRY);
            warn!(
                company = lead.company_name(),
                "Fallback enrichment: used raw response"
            );
        }
    }

    lead
}

/// Enrich from what the lead already has, without any generated text.
fn hard_fallback(mut lead: Lead) -> Lead {
    let description = if lead.description().is_empty() {
        format!("Company specializing in {}", lead.industry())
    } else {
        lead.description().to_string()
    };
    let industry = lead.industry().to_string();

    lead.mark_enriched(&description, industry);
    warn!(company = lead.company_name(), "Used fallback enrichment");
    lead
}
