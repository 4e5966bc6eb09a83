// HTTP server setup (Axum, read-only JSON API)
pub mod app;
pub mod routes;

pub use app::*;
