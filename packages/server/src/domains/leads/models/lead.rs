use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CandidateRecord, SearchContext};
use crate::common::utils::truncate_chars;
use crate::domains::leads::utils::derive_email;

/// Maximum length of a lead description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// A company lead: a candidate record plus enrichment results.
///
/// Either fully un-enriched (`enriched == false`, empty email) or fully
/// enriched (`enriched == true`, derived email, description of at most
/// [`MAX_DESCRIPTION_CHARS`]). The only transition between the two is
/// [`Lead::mark_enriched`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    company_name: String,
    email: String,
    website: String,
    created_at: DateTime<Utc>,
    description: String,
    industry: String,
    enriched: bool,
    search_context: Option<SearchContext>,
}

impl Lead {
    pub fn new(
        company_name: impl Into<String>,
        website: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            email: String::new(),
            website: website.into(),
            created_at,
            description: description.into(),
            industry: String::new(),
            enriched: false,
            search_context: None,
        }
    }

    /// Build an un-enriched lead from a candidate. Candidates without a name
    /// produce no lead.
    pub fn from_candidate(candidate: CandidateRecord, created_at: DateTime<Utc>) -> Option<Self> {
        if !candidate.has_name() {
            return None;
        }

        Some(Self::new(
            candidate.name,
            candidate.website.unwrap_or_default(),
            candidate.description.unwrap_or_default(),
            created_at,
        ))
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn is_enriched(&self) -> bool {
        self.enriched
    }

    pub fn search_context(&self) -> Option<&SearchContext> {
        self.search_context.as_ref()
    }

    /// Apply an enrichment result. Sets description (truncated), industry and
    /// the derived email in one step. No-op on an already enriched lead.
    pub(crate) fn mark_enriched(&mut self, description: &str, industry: impl Into<String>) {
        if self.enriched {
            return;
        }

        self.description = truncate_chars(description, MAX_DESCRIPTION_CHARS);
        self.industry = industry.into();
        self.email = derive_email(&self.company_name);
        self.enriched = true;
    }

    pub(crate) fn attach_search_context(&mut self, context: SearchContext) {
        self.search_context = Some(context);
    }
}
