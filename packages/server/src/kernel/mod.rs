//! Kernel module - provider clients, dependencies and background tasks.

pub mod ai;
pub mod crunchbase_client;
pub mod deps;
pub mod scheduled_tasks;
pub mod serpapi_client;
pub mod test_dependencies;
pub mod traits;

pub use ai::GeminiAI;
pub use crunchbase_client::CrunchbaseClient;
pub use deps::ServerDeps;
pub use scheduled_tasks::start_scheduler;
pub use serpapi_client::SerpApiClient;
pub use test_dependencies::{MockAI, MockBusinessData, MockSearchService, TestDependencies};
pub use traits::*;
