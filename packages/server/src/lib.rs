// Lead Engine - API Core
//
// Periodically pulls company records from a business-data provider, enriches
// them with generated descriptions and search context, and serves the
// accumulated leads over a read-only JSON API.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
