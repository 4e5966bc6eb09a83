//! In-memory lead store.
//!
//! One owned handle, cloned into the pipeline and the HTTP layer. The pipeline
//! is the only writer; a cycle's leads and its `last_update` are committed
//! under a single write lock so readers never see half a batch.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, warn};

use super::models::Lead;
use crate::common::{LeadError, ProviderKind};

/// Number of recorded errors at which status flips from `active` to `warning`.
pub const WARNING_THRESHOLD: usize = 5;

/// Default number of error entries kept in memory.
pub const DEFAULT_ERROR_CAPACITY: usize = 1000;

/// Lower bound on the retained window; the `/api/errors` view needs 50.
pub const MIN_ERROR_CAPACITY: usize = 50;

/// What kind of failure an error log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "provider")]
pub enum ErrorKind {
    Provider(ProviderKind),
    Parse,
    Pipeline,
    Config,
    /// The business-data provider returned nothing for a cycle
    NoData,
}

impl From<&LeadError> for ErrorKind {
    fn from(err: &LeadError) -> Self {
        match err {
            LeadError::Provider { kind, .. } => Self::Provider(*kind),
            LeadError::Parse { .. } => Self::Parse,
            LeadError::Pipeline(_) => Self::Pipeline,
            LeadError::Config(_) => Self::Config,
        }
    }
}

/// A recovered failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorLogEntry {
    pub recorded_at: DateTime<Utc>,
    pub kind: ErrorKind,
    pub message: String,
}

/// Coarse health derived from the total error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Active,
    Warning,
}

impl HealthStatus {
    pub fn from_error_count(total_errors: usize) -> Self {
        if total_errors < WARNING_THRESHOLD {
            Self::Active
        } else {
            Self::Warning
        }
    }
}

/// Most recent leads plus counters.
#[derive(Debug, Clone, Serialize)]
pub struct LeadsOverview {
    pub leads: Vec<Lead>,
    pub total_leads: usize,
    pub enriched_leads: usize,
    pub last_update: DateTime<Utc>,
}

/// Counters, recent errors and health.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStats {
    pub total_leads: usize,
    pub enriched_leads: usize,
    pub last_update: DateTime<Utc>,
    pub errors: Vec<String>,
    pub status: HealthStatus,
}

/// Recent error messages and the all-time error count.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub errors: Vec<String>,
    pub total_errors: usize,
}

#[derive(Debug)]
struct StoreInner {
    leads: Vec<Lead>,
    errors: VecDeque<ErrorLogEntry>,
    /// Every error ever recorded, including ones evicted from `errors`
    total_errors: usize,
    error_capacity: usize,
    last_update: DateTime<Utc>,
}

impl StoreInner {
    fn enriched_count(&self) -> usize {
        self.leads.iter().filter(|l| l.is_enriched()).count()
    }

    fn recent_leads(&self, limit: usize) -> Vec<Lead> {
        let skip = self.leads.len().saturating_sub(limit);
        self.leads[skip..].to_vec()
    }

    fn recent_error_messages(&self, limit: usize) -> Vec<String> {
        let skip = self.errors.len().saturating_sub(limit);
        self.errors
            .iter()
            .skip(skip)
            .map(|e| e.message.clone())
            .collect()
    }
}

/// Shared handle to the accumulated pipeline state.
#[derive(Clone)]
pub struct LeadStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl Default for LeadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LeadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadStore").finish_non_exhaustive()
    }
}

impl LeadStore {
    pub fn new() -> Self {
        Self::with_error_capacity(DEFAULT_ERROR_CAPACITY)
    }

    /// Store keeping at most `capacity` error entries (never fewer than
    /// [`MIN_ERROR_CAPACITY`]). The total error count is always exact.
    pub fn with_error_capacity(capacity: usize) -> Self {
        let error_capacity = capacity.max(MIN_ERROR_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                leads: Vec::new(),
                errors: VecDeque::with_capacity(error_capacity.min(DEFAULT_ERROR_CAPACITY)),
                total_errors: 0,
                error_capacity,
                last_update: Utc::now(),
            })),
        }
    }

    // =========================================================================
    // Writes (pipeline only)
    // =========================================================================

    /// Append a cycle's leads in order and advance `last_update`, atomically.
    /// An empty batch changes nothing. Returns the number of leads appended.
    pub async fn commit_batch(&self, leads: Vec<Lead>, completed_at: DateTime<Utc>) -> usize {
        if leads.is_empty() {
            return 0;
        }

        let count = leads.len();
        let mut inner = self.inner.write().await;
        inner.leads.extend(leads);
        inner.last_update = completed_at;
        count
    }

    /// Append an error log entry and mirror it to the tracing log.
    pub async fn record(&self, kind: ErrorKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            ErrorKind::NoData | ErrorKind::Parse => warn!(?kind, "{}", message),
            _ => error!(?kind, "{}", message),
        }

        let entry = ErrorLogEntry {
            recorded_at: Utc::now(),
            kind,
            message,
        };

        let mut inner = self.inner.write().await;
        if inner.errors.len() >= inner.error_capacity {
            inner.errors.pop_front();
        }
        inner.errors.push_back(entry);
        inner.total_errors += 1;
    }

    /// Record a typed error, prefixed with what was being attempted.
    pub async fn record_error(&self, context: impl fmt::Display, err: &LeadError) {
        self.record(ErrorKind::from(err), format!("{context}: {err}"))
            .await;
    }

    // =========================================================================
    // Read projections
    // =========================================================================

    pub async fn leads_overview(&self, limit: usize) -> LeadsOverview {
        let inner = self.inner.read().await;
        LeadsOverview {
            leads: inner.recent_leads(limit),
            total_leads: inner.leads.len(),
            enriched_leads: inner.enriched_count(),
            last_update: inner.last_update,
        }
    }

    pub async fn stats(&self, error_limit: usize) -> PipelineStats {
        let inner = self.inner.read().await;
        PipelineStats {
            total_leads: inner.leads.len(),
            enriched_leads: inner.enriched_count(),
            last_update: inner.last_update,
            errors: inner.recent_error_messages(error_limit),
            status: HealthStatus::from_error_count(inner.total_errors),
        }
    }

    pub async fn error_report(&self, limit: usize) -> ErrorReport {
        let inner = self.inner.read().await;
        ErrorReport {
            errors: inner.recent_error_messages(limit),
            total_errors: inner.total_errors,
        }
    }

    pub async fn status(&self) -> HealthStatus {
        HealthStatus::from_error_count(self.inner.read().await.total_errors)
    }

    /// All leads, oldest first.
    pub async fn leads(&self) -> Vec<Lead> {
        self.inner.read().await.leads.clone()
    }

    pub async fn lead_count(&self) -> usize {
        self.inner.read().await.leads.len()
    }

    pub async fn last_update(&self) -> DateTime<Utc> {
        self.inner.read().await.last_update
    }

    /// Retained error entries, oldest first.
    pub async fn error_entries(&self) -> Vec<ErrorLogEntry> {
        self.inner.read().await.errors.iter().cloned().collect()
    }

    pub async fn error_count(&self) -> usize {
        self.inner.read().await.total_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn lead(name: &str) -> Lead {
        Lead::new(name, "", "", Utc::now())
    }

    fn enriched(name: &str) -> Lead {
        let mut lead = lead(name);
        lead.mark_enriched("desc", "industry");
        lead
    }

    #[tokio::test]
    async fn commit_appends_in_order_and_advances_last_update() {
        let store = LeadStore::new();
        let completed = store.last_update().await + Duration::seconds(5);

        let added = store
            .commit_batch(vec![enriched("A"), enriched("B")], completed)
            .await;

        assert_eq!(added, 2);
        let names: Vec<String> = store
            .leads()
            .await
            .iter()
            .map(|l| l.company_name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(store.last_update().await, completed);
    }

    #[tokio::test]
    async fn empty_commit_leaves_last_update() {
        let store = LeadStore::new();
        let before = store.last_update().await;

        let added = store
            .commit_batch(vec![], before + Duration::hours(1))
            .await;

        assert_eq!(added, 0);
        assert_eq!(store.last_update().await, before);
    }

    #[tokio::test]
    async fn overview_returns_most_recent_in_insertion_order() {
        let store = LeadStore::new();
        let batch: Vec<Lead> = (0..5).map(|i| lead(&format!("L{i}"))).collect();
        store.commit_batch(batch, Utc::now()).await;
        store.commit_batch(vec![enriched("E")], Utc::now()).await;

        let overview = store.leads_overview(3).await;

        let names: Vec<&str> = overview.leads.iter().map(|l| l.company_name()).collect();
        assert_eq!(names, vec!["L3", "L4", "E"]);
        assert_eq!(overview.total_leads, 6);
        assert_eq!(overview.enriched_leads, 1);
    }

    #[tokio::test]
    async fn status_flips_at_threshold() {
        let store = LeadStore::new();
        for i in 0..WARNING_THRESHOLD - 1 {
            store.record(ErrorKind::Pipeline, format!("e{i}")).await;
        }
        assert_eq!(store.status().await, HealthStatus::Active);

        store.record(ErrorKind::Pipeline, "one more").await;
        assert_eq!(store.status().await, HealthStatus::Warning);
    }

    #[tokio::test]
    async fn ring_buffer_keeps_recent_and_exact_total() {
        let store = LeadStore::with_error_capacity(MIN_ERROR_CAPACITY);
        for i in 0..MIN_ERROR_CAPACITY + 10 {
            store.record(ErrorKind::Pipeline, format!("e{i}")).await;
        }

        let report = store.error_report(MIN_ERROR_CAPACITY).await;
        assert_eq!(report.total_errors, MIN_ERROR_CAPACITY + 10);
        assert_eq!(report.errors.len(), MIN_ERROR_CAPACITY);
        assert_eq!(report.errors.first().unwrap(), "e10");
        assert_eq!(report.errors.last().unwrap(), &format!("e{}", MIN_ERROR_CAPACITY + 9));
    }

    #[tokio::test]
    async fn record_error_tags_kind_and_prefixes_context() {
        let store = LeadStore::new();
        let err = LeadError::provider(ProviderKind::Search, "timeout");

        store.record_error("Search failed for Acme", &err).await;

        let entries = store.error_entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ErrorKind::Provider(ProviderKind::Search));
        assert_eq!(
            entries[0].message,
            "Search failed for Acme: search provider error: timeout"
        );
    }

    #[tokio::test]
    async fn stats_limits_error_messages() {
        let store = LeadStore::new();
        for i in 0..8 {
            store.record(ErrorKind::Parse, format!("e{i}")).await;
        }

        let stats = store.stats(5).await;
        assert_eq!(stats.errors, vec!["e3", "e4", "e5", "e6", "e7"]);
        assert_eq!(stats.status, HealthStatus::Warning);
    }

    #[test]
    fn health_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(HealthStatus::Active).unwrap(),
            serde_json::json!("active")
        );
        assert_eq!(
            serde_json::to_value(HealthStatus::Warning).unwrap(),
            serde_json::json!("warning")
        );
    }
}
