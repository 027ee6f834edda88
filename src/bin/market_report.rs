//! Market Report - Aggregated Metrics from the Cache
//!
//! Loads the cached dataset and prints the dashboard's headline numbers:
//! global market overview, per-exchange monthly totals, and the efficiency
//! ranking. Run `init_cache` first.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin market_report
//! ```

use feeflow::series_core::metrics;
use feeflow::store::CacheBackend;
use feeflow::{CoinGeckoClient, Config, SqliteCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env();
    let cache = SqliteCache::open(&config.db_path)?;

    let dataset = cache.load_exchange_data().await?;
    if dataset.is_empty() {
        log::warn!("Cache at {} is empty, run init_cache first", config.db_path);
        return Ok(());
    }

    let client = CoinGeckoClient::new(&config)?;
    let global = client.fetch_global_market().await;

    println!("Global market");
    println!(
        "  Total market cap: ${}",
        metrics::format_large_number(global.total_market_cap)
    );
    println!(
        "  24h volume:       ${}",
        metrics::format_large_number(global.total_volume)
    );
    if let Some(btc) = global.market_cap_percentage.get("btc") {
        println!("  BTC dominance:    {:.1}%", btc);
    }
    println!();

    let totals = metrics::monthly_totals(&dataset);
    let overall = metrics::overall_commission_rate(&totals);

    println!("Trailing 12 months ({} exchanges)", totals.len());
    for t in &totals {
        println!(
            "  {:<10} volume ${:<10} commission ${}",
            t.name,
            metrics::format_large_number(t.total_volume),
            metrics::format_large_number(t.total_commission),
        );
    }
    println!("  Overall commission rate: {:.3}%", overall);
    println!();

    println!("Efficiency ranking (commission per unit volume)");
    for (pos, t) in metrics::rank_by_efficiency(totals).iter().enumerate() {
        println!("  {}. {:<10} {:.3}%", pos + 1, t.name, t.efficiency);
    }
    println!();

    let prices = cache.load_prices().await?;
    if !prices.is_empty() {
        println!("Cached prices");
        for (coin_id, name, symbol) in feeflow::fetcher::TRACKED_COINS {
            if let Some(quote) = prices.get(coin_id) {
                println!(
                    "  {:<9} ({}) ${:<12} {:+.2}% 24h",
                    name, symbol, quote.usd, quote.usd_24h_change
                );
            }
        }
        println!();
    }

    let news = cache.load_news().await?;
    if !news.is_empty() {
        println!("Headlines");
        for item in &news {
            println!("  [{}] {}", item.published_at, item.title);
        }
    }

    Ok(())
}
