//! Runtime configuration from environment variables

use std::env;

const DEFAULT_DB_PATH: &str = "data/feeflow.db";
const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_NEWS_LIMIT: usize = 10;

/// Configuration for the cache and upstream client.
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite cache file
    pub db_path: String,

    /// Base URL for the CoinGecko API
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Maximum number of news items fetched and cached
    pub news_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `FEEFLOW_DB_PATH` (default: data/feeflow.db)
    /// - `COINGECKO_BASE_URL` (default: https://api.coingecko.com/api/v3)
    /// - `API_TIMEOUT_SECS` (default: 10)
    /// - `NEWS_LIMIT` (default: 10)
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("FEEFLOW_DB_PATH")
                .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),

            api_base_url: env::var("COINGECKO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),

            request_timeout_secs: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),

            news_limit: env::var("NEWS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_NEWS_LIMIT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }
}
