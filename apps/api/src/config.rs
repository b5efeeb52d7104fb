use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default except the scoring service, which is optional by
/// design — without it the engine runs on the deterministic fallback scorer.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Remote match-analysis endpoint. None disables external scoring.
    pub scoring_service_url: Option<String>,
    pub scoring_service_api_key: Option<String>,
    /// Bounded wait per external scoring call, in milliseconds.
    pub scoring_timeout_ms: u64,
    pub high_stipend_threshold: u32,
    /// Optional JSON files overriding the built-in catalog and taxonomy.
    pub catalog_path: Option<String>,
    pub taxonomy_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_service_url: optional_env("SCORING_SERVICE_URL"),
            scoring_service_api_key: optional_env("SCORING_SERVICE_API_KEY"),
            scoring_timeout_ms: parse_env("SCORING_TIMEOUT_MS", 4_000)?,
            high_stipend_threshold: parse_env("HIGH_STIPEND_THRESHOLD", 20_000)?,
            catalog_path: optional_env("CATALOG_PATH"),
            taxonomy_path: optional_env("SKILL_TAXONOMY_PATH"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
