use axum::{extract::Extension, Json};

use crate::domains::leads::LeadsOverview;
use crate::server::app::AppState;

/// Most recent leads returned by `/api/leads`.
pub const LEADS_PAGE_SIZE: usize = 100;

/// Most recent leads plus totals and the last update time.
pub async fn leads_handler(Extension(state): Extension<AppState>) -> Json<LeadsOverview> {
    Json(state.store.leads_overview(LEADS_PAGE_SIZE).await)
}
