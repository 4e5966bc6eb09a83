pub mod email;
pub mod enrichment_parsing;

pub use email::*;
pub use enrichment_parsing::*;
