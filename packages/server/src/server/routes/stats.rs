use axum::{extract::Extension, Json};

use crate::domains::leads::PipelineStats;
use crate::server::app::AppState;

/// Error messages included in `/api/stats`.
pub const STATS_ERROR_LIMIT: usize = 5;

/// Totals, recent errors and health status.
pub async fn stats_handler(Extension(state): Extension<AppState>) -> Json<PipelineStats> {
    Json(state.store.stats(STATS_ERROR_LIMIT).await)
}
