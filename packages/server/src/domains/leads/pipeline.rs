//! Update cycle: fetch, enrich, search, commit.
//!
//! One cycle pulls fresh candidates from the business-data provider, turns
//! them into leads, enriches each lead sequentially with a fixed delay
//! between leads, attaches search context and commits the batch to the
//! store in one step. Every failure is recorded in the store; nothing
//! propagates to the caller.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::FutureExt;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::actions::{enrich_lead, fetch_search_context};
use super::models::Lead;
use super::store::{ErrorKind, LeadStore};
use crate::common::LeadError;
use crate::config::Config;
use crate::kernel::ServerDeps;

/// Recorded when a fetch produced no candidates.
pub const NO_DATA_MESSAGE: &str = "No new data retrieved from business-data provider";

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Pause between consecutive leads, to stay under provider rate limits.
    pub lead_delay: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            lead_delay: Duration::from_secs(2),
        }
    }
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            lead_delay: config.lead_delay,
        }
    }

    /// No delay between leads. Used by tests.
    pub fn immediate() -> Self {
        Self {
            lead_delay: Duration::ZERO,
        }
    }
}

/// What a single cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fetch returned nothing (or failed); store untouched apart from the error log.
    NoData,
    /// Batch committed. `discarded` counts candidates without a name.
    Completed { added: usize, discarded: usize },
    /// The cycle aborted unexpectedly; no leads from it were committed.
    Failed,
    /// Another cycle was still running.
    Skipped,
}

#[derive(Clone)]
pub struct LeadPipeline {
    deps: ServerDeps,
    store: LeadStore,
    settings: PipelineSettings,
    running: Arc<Mutex<()>>,
}

impl LeadPipeline {
    pub fn new(deps: ServerDeps, store: LeadStore, settings: PipelineSettings) -> Self {
        Self {
            deps,
            store,
            settings,
            running: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &LeadStore {
        &self.store
    }

    /// Run one update cycle.
    ///
    /// Only one cycle runs at a time; an overlapping call returns
    /// [`CycleOutcome::Skipped`] immediately.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("Previous lead update still running, skipping this cycle");
            return CycleOutcome::Skipped;
        };

        info!("Starting lead update process");

        match AssertUnwindSafe(self.execute()).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                let err = LeadError::Pipeline(panic_message(&*panic));
                self.store
                    .record_error("Unexpected error during lead update", &err)
                    .await;
                CycleOutcome::Failed
            }
        }
    }

    async fn execute(&self) -> CycleOutcome {
        let candidates = match self.deps.business_data.fetch_candidates().await {
            Ok(candidates) => candidates,
            Err(e) => {
                self.store
                    .record_error("Error fetching business data", &e)
                    .await;
                Vec::new()
            }
        };

        if candidates.is_empty() {
            self.store.record(ErrorKind::NoData, NO_DATA_MESSAGE).await;
            return CycleOutcome::NoData;
        }

        let fetched = candidates.len();
        let created_at = Utc::now();
        let leads: Vec<Lead> = candidates
            .into_iter()
            .filter_map(|candidate| Lead::from_candidate(candidate, created_at))
            .collect();
        let discarded = fetched - leads.len();

        info!(count = leads.len(), discarded, "Created new lead objects");

        let mut batch = Vec::with_capacity(leads.len());
        for (index, lead) in leads.into_iter().enumerate() {
            if index > 0 && !self.settings.lead_delay.is_zero() {
                tokio::time::sleep(self.settings.lead_delay).await;
            }
            batch.push(self.process_lead(lead).await);
        }

        let added = self.store.commit_batch(batch, Utc::now()).await;
        info!(added, "Successfully added new leads");

        CycleOutcome::Completed { added, discarded }
    }

    async fn process_lead(&self, lead: Lead) -> Lead {
        let mut lead = enrich_lead(lead, self.deps.ai.as_ref(), &self.store).await;
        let context =
            fetch_search_context(lead.company_name(), self.deps.search.as_ref(), &self.store)
                .await;
        lead.attach_search_context(context);
        lead
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
