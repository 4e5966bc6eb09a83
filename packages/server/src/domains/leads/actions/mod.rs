//! Leads domain actions - business logic functions
//!
//! Actions are async functions called by the pipeline. Each one is a failure
//! boundary: provider errors are recorded in the lead store and turned into a
//! best-effort result, never returned to the caller.

mod enrich;
mod search;

pub use enrich::enrich_lead;
pub use search::fetch_search_context;
