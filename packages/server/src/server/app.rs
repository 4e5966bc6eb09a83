//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::leads::LeadStore;
use crate::server::routes::{errors_handler, health_handler, leads_handler, stats_handler};

/// Shared application state
///
/// Handlers only read from the store; the pipeline is the single writer.
#[derive(Clone)]
pub struct AppState {
    pub store: LeadStore,
}

/// Build the Axum application router
pub fn build_app(store: LeadStore) -> Router {
    let app_state = AppState { store };

    // Read-only API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/leads", get(leads_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/errors", get(errors_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
