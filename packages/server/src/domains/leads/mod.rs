// Leads domain - the enrichment pipeline
//
// Responsibilities:
// - Turning business-data candidates into leads
// - AI enrichment of description/industry with soft and hard fallbacks
// - Attaching best-effort search context
// - Accumulating leads, error history and last-update time in the lead store

pub mod actions;
pub mod models;
pub mod pipeline;
pub mod store;
pub mod utils;

pub use models::*;
pub use pipeline::{CycleOutcome, LeadPipeline, PipelineSettings};
pub use store::{
    ErrorKind, ErrorLogEntry, ErrorReport, HealthStatus, LeadStore, LeadsOverview, PipelineStats,
};
