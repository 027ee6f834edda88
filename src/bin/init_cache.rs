//! Cache Initialization - Fetch, Generate, Persist
//!
//! Builds the full exchange dataset (live market caps when reachable,
//! synthetic fallback otherwise), fetches side data (prices, news), and
//! bulk-writes everything into the SQLite cache. Safe to re-run: an already
//! populated cache is left untouched.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin init_cache
//! ```
//!
//! ## Environment Variables
//!
//! - FEEFLOW_DB_PATH - SQLite cache path (default: data/feeflow.db)
//! - COINGECKO_BASE_URL - API base (default: https://api.coingecko.com/api/v3)
//! - API_TIMEOUT_SECS - Per-request timeout (default: 10)
//! - NEWS_LIMIT - Cached news items (default: 10)
//! - RUST_LOG - Logging level (optional, default: info)

use chrono::Utc;
use std::path::Path;

use feeflow::fetcher::build_dataset;
use feeflow::store::CacheBackend;
use feeflow::{CoinGeckoClient, Config, SqliteCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env();

    log::info!("🚀 Starting cache initialization");
    log::info!("   Cache path: {}", config.db_path);
    log::info!("   API base: {}", config.api_base_url);
    log::info!("   Request timeout: {}s", config.request_timeout_secs);

    if let Some(parent) = Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let client = CoinGeckoClient::new(&config)?;
    let mut rng = rand::thread_rng();

    let dataset = build_dataset(&client, Utc::now(), &mut rng).await?;
    log::info!("📊 Generated series for {} exchanges", dataset.len());

    let prices = client.fetch_simple_prices().await;
    let news = client.fetch_crypto_news().await;

    let cache = SqliteCache::open(&config.db_path)?;

    if cache.init_exchange_data(&dataset).await? {
        log::info!("   Exchange data written");
    } else {
        log::info!("   Exchange data kept from previous run");
    }

    cache.store_prices(&prices).await?;
    log::info!("   Stored {} price quotes", prices.len());

    cache.store_news(&news).await?;
    log::info!("   Stored {} news items", news.len());

    log::info!("✅ Cache initialization complete");

    Ok(())
}
