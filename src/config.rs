// src/config.rs
//! Environment-driven service configuration

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::info;

use crate::core::count_cache::{DEFAULT_COUNT_CAPACITY, DEFAULT_COUNT_TTL};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_API_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub port: u16,
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
}

#[derive(Clone)]
pub struct UpstreamConfig {
    /// `None` runs the service in offline mode
    pub api_key: Option<String>,
    pub api_host: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub capacity: u64,
}

// Keep the key out of logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfigManager {
    /// Load configuration from the environment, after an optional `.env` file.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let config = Self {
            port: parse_var("PORT", DEFAULT_PORT)?,
            upstream: UpstreamConfig {
                api_key: env::var("RAPIDAPI_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                api_host: env::var("RAPIDAPI_HOST")
                    .unwrap_or_else(|_| DEFAULT_API_HOST.to_string()),
                base_url: env::var("JSEARCH_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            },
            cache: CacheConfig {
                ttl: Duration::from_secs(parse_var(
                    "JOBS_CACHE_TTL_SECS",
                    DEFAULT_COUNT_TTL.as_secs(),
                )?),
                capacity: parse_var("JOBS_CACHE_CAPACITY", DEFAULT_COUNT_CAPACITY)?,
            },
        };

        info!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn is_live(&self) -> bool {
        self.upstream.api_key.is_some()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream: UpstreamConfig {
                api_key: None,
                api_host: DEFAULT_API_HOST.to_string(),
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            cache: CacheConfig {
                ttl: DEFAULT_COUNT_TTL,
                capacity: DEFAULT_COUNT_CAPACITY,
            },
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got '{}'", name, raw)),
        _ => Ok(default),
    }
}
