pub mod candidate;
pub mod lead;
pub mod search_context;

pub use candidate::*;
pub use lead::*;
pub use search_context::*;
