//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! ```text
//! Scheduler (every UPDATE_INTERVAL_HOURS)
//!     │
//!     └─► LeadPipeline::run_cycle()
//!             └─► fetch → enrich → search → commit batch
//! ```
//!
//! The first cycle runs at startup, before the scheduler is started; the
//! repeated job only fires after a full interval has elapsed.

use std::time::Duration;

use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::leads::{CycleOutcome, LeadPipeline};

/// Start the periodic lead update.
pub async fn start_scheduler(pipeline: LeadPipeline, interval: Duration) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let update_job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let pipeline = pipeline.clone();
        Box::pin(async move {
            run_scheduled_update(&pipeline).await;
        })
    })?;

    scheduler.add(update_job).await?;
    scheduler.start().await?;

    tracing::info!(
        interval_secs = interval.as_secs(),
        "Scheduled tasks started (periodic lead update)"
    );
    Ok(scheduler)
}

async fn run_scheduled_update(pipeline: &LeadPipeline) {
    tracing::info!("Running scheduled lead update");

    match pipeline.run_cycle().await {
        CycleOutcome::Completed { added, discarded } => {
            tracing::info!(added, discarded, "Scheduled lead update complete");
        }
        CycleOutcome::NoData => tracing::info!("Scheduled lead update found no new data"),
        CycleOutcome::Failed => tracing::error!("Scheduled lead update failed"),
        CycleOutcome::Skipped => tracing::warn!("Scheduled lead update skipped"),
    }
}
