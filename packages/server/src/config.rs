use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
///
/// Provider credentials are optional here; a missing key surfaces as a
/// provider error the first time that provider is called.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub crunchbase_api_key: Option<String>,
    pub crunchbase_api_url: Option<String>,
    pub crunchbase_page_size: usize,
    pub serpapi_api_key: Option<String>,
    pub update_interval: Duration,
    pub lead_delay: Duration,
    pub error_log_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: parse_or("PORT", 5000)?,
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| gemini_client::DEFAULT_MODEL.to_string()),
            crunchbase_api_key: non_empty("CRUNCHBASE_API_KEY"),
            crunchbase_api_url: non_empty("CRUNCHBASE_API_URL"),
            crunchbase_page_size: parse_or("CRUNCHBASE_PAGE_SIZE", 5)?,
            serpapi_api_key: non_empty("SERPAPI_API_KEY"),
            update_interval: interval_from_hours(parse_or("UPDATE_INTERVAL_HOURS", 4)?)?,
            lead_delay: Duration::from_secs(parse_or("LEAD_DELAY_SECS", 2)?),
            error_log_capacity: parse_or("ERROR_LOG_CAPACITY", 1000)?,
        })
    }
}

/// Scheduler interval; zero or overflowing hour counts are rejected.
fn interval_from_hours(hours: u64) -> Result<Duration> {
    if hours == 0 {
        bail!("UPDATE_INTERVAL_HOURS must be at least 1");
    }
    let secs = hours
        .checked_mul(3600)
        .context("UPDATE_INTERVAL_HOURS is too large")?;
    Ok(Duration::from_secs(secs))
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid number")),
        Err(_) => Ok(default),
    }
}
