// Common types and utilities shared across the application

pub mod error;
pub mod utils;

pub use error::{LeadError, ProviderKind, Result};
