use anyhow::{Context, Result};

use crate::llm_client::ANTHROPIC_API_URL;

const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub oracle_api_url: String,
    pub oracle_timeout_secs: u64,
    /// Transport-level retries on 429 / 5xx. Zero means a single attempt.
    pub oracle_max_retries: u32,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            oracle_api_url: std::env::var("ORACLE_API_URL")
                .unwrap_or_else(|_| ANTHROPIC_API_URL.to_string()),
            oracle_timeout_secs: parse_env("ORACLE_TIMEOUT_SECS", DEFAULT_ORACLE_TIMEOUT_SECS)?,
            oracle_max_retries: parse_env("ORACLE_MAX_RETRIES", 0)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
