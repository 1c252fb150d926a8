use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;
use crate::matching::skill_gap::{clamp_top_n, DEFAULT_TOP_N};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration loaded from environment variables.
/// Nothing is required; invalid numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Missing-skill cap used when a request does not send `top_n`.
    pub default_top_n: usize,
    pub max_upload_bytes: usize,
    /// When set, every uploaded document is archived here.
    pub upload_dir: Option<PathBuf>,
    /// When set, entity recognition runs through the LLM.
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // .env is optional

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_top_n: clamp_top_n(parse_or(&lookup, "DEFAULT_TOP_N", DEFAULT_TOP_N as i64)?),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            upload_dir: non_empty("UPLOAD_DIR").map(PathBuf::from),
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            llm_model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
