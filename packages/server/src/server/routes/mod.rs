// HTTP routes
pub mod errors;
pub mod health;
pub mod leads;
pub mod stats;

pub use errors::*;
pub use health::*;
pub use leads::*;
pub use stats::*;
