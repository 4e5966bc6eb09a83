// Business domains
pub mod leads;
