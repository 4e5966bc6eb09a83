//! Error taxonomy for the lead pipeline.
//!
//! Every variant is recovered inside the component that produced it and ends
//! up as an entry in the lead store's error log. Only the rendered message is
//! ever exposed over HTTP; the tags exist so that code and tests can tell the
//! kinds apart.

use std::fmt;

use serde::Serialize;

/// Which third-party provider a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Company records (Crunchbase)
    BusinessData,
    /// Text generation (Gemini)
    Generation,
    /// Web search (SerpAPI)
    Search,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessData => "business_data",
            Self::Generation => "generation",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// Transport failure or non-success response from a provider.
    #[error("{kind} provider error{}: {message}", status_suffix(.status))]
    Provider {
        kind: ProviderKind,
        status: Option<u16>,
        message: String,
    },

    /// Generated text could not be parsed into an enrichment.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Unexpected failure while running a cycle.
    #[error("{0}")]
    Pipeline(String),

    /// Missing or invalid configuration for a provider.
    #[error("config error: {0}")]
    Config(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LeadError>;

impl LeadError {
    /// Provider failure without an HTTP status (transport, decode, missing config).
    pub fn provider(kind: ProviderKind, message: impl Into<String>) -> Self {
        Self::Provider {
            kind,
            status: None,
            message: message.into(),
        }
    }

    /// Provider answered with a non-success status.
    pub fn provider_status(kind: ProviderKind, status: u16, body: impl Into<String>) -> Self {
        Self::Provider {
            kind,
            status: Some(status),
            message: body.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Provider kind, if this is a provider failure.
    pub fn provider_kind(&self) -> Option<ProviderKind> {
        match self {
            Self::Provider { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_status() {
        let err = LeadError::provider_status(ProviderKind::BusinessData, 401, "bad key");
        assert_eq!(
            err.to_string(),
            "business_data provider error (status 401): bad key"
        );
    }

    #[test]
    fn provider_error_display_without_status() {
        let err = LeadError::provider(ProviderKind::Search, "connection refused");
        assert_eq!(err.to_string(), "search provider error: connection refused");
        assert_eq!(err.provider_kind(), Some(ProviderKind::Search));
    }

    #[test]
    fn parse_error_has_no_provider_kind() {
        let err = LeadError::parse("missing fence");
        assert_eq!(err.to_string(), "parse error: missing fence");
        assert_eq!(err.provider_kind(), None);
    }
}
