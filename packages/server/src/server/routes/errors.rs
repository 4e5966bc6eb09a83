use axum::{extract::Extension, Json};

use crate::domains::leads::ErrorReport;
use crate::server::app::AppState;

/// Error messages returned by `/api/errors`.
pub const ERROR_PAGE_SIZE: usize = 50;

pub async fn errors_handler(Extension(state): Extension<AppState>) -> Json<ErrorReport> {
    Json(state.store.error_report(ERROR_PAGE_SIZE).await)
}
