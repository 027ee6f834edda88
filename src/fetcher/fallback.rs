//! Literal fallback datasets substituted when upstream queries fail
//!
//! Values are fixed reference snapshots; tests assert them verbatim, so
//! edits here are schema changes, not tuning.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::coingecko::{CoinMarket, GlobalMarket, NewsItem, PriceQuote};

/// Sample top-coin markets used when the coin-markets query fails.
pub fn sample_market_data() -> Vec<CoinMarket> {
    vec![
        CoinMarket {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            current_price: Some(65_000.0),
            market_cap: Some(1_200_000_000_000.0),
        },
        CoinMarket {
            id: "ethereum".to_string(),
            symbol: "eth".to_string(),
            name: "Ethereum".to_string(),
            current_price: Some(3_500.0),
            market_cap: Some(400_000_000_000.0),
        },
        CoinMarket {
            id: "tether".to_string(),
            symbol: "usdt".to_string(),
            name: "Tether".to_string(),
            current_price: Some(1.0),
            market_cap: Some(100_000_000_000.0),
        },
        CoinMarket {
            id: "bnb".to_string(),
            symbol: "bnb".to_string(),
            name: "BNB".to_string(),
            current_price: Some(600.0),
            market_cap: Some(90_000_000_000.0),
        },
        CoinMarket {
            id: "solana".to_string(),
            symbol: "sol".to_string(),
            name: "Solana".to_string(),
            current_price: Some(150.0),
            market_cap: Some(70_000_000_000.0),
        },
    ]
}

/// Sample global market stats used when the global query fails.
pub fn sample_global_market() -> GlobalMarket {
    let dominance = [
        ("btc", 52.4),
        ("eth", 18.7),
        ("usdt", 4.2),
        ("bnb", 3.1),
        ("sol", 2.8),
        ("xrp", 2.1),
        ("ada", 1.9),
        ("usdc", 1.8),
        ("doge", 1.2),
        ("dot", 0.9),
    ];

    GlobalMarket {
        total_market_cap: 2_450_000_000_000.0,
        total_volume: 98_000_000_000.0,
        market_cap_percentage: dominance
            .iter()
            .map(|(sym, pct)| (sym.to_string(), *pct))
            .collect(),
        market_cap_change_24h: 2.35,
    }
}

/// Sample headlines used when the news query fails, dated at `now`.
pub fn sample_news(now: DateTime<Utc>) -> Vec<NewsItem> {
    let date = now.format("%Y-%m-%d").to_string();
    let records = [
        (
            "Bitcoin Surpasses $70,000 in Latest Rally",
            "The world's largest cryptocurrency reached new heights as institutional adoption continues to grow.",
            "https://example.com/news/1",
        ),
        (
            "Ethereum Upgrade Improves Network Efficiency",
            "The latest Ethereum protocol upgrade has resulted in lower gas fees and faster transaction times.",
            "https://example.com/news/2",
        ),
        (
            "Regulators Propose New Framework for Cryptocurrency Exchanges",
            "Government agencies are working on clearer guidelines for crypto exchange operations.",
            "https://example.com/news/3",
        ),
        (
            "Binance Introduces New Trading Competitions",
            "The largest crypto exchange by volume has announced new trading incentives and reduced fees.",
            "https://example.com/news/4",
        ),
        (
            "Coinbase Expands Services to New Regions",
            "The popular exchange is now available in several additional countries, increasing global access.",
            "https://example.com/news/5",
        ),
    ];

    records
        .iter()
        .map(|(title, description, url)| NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            published_at: date.clone(),
        })
        .collect()
}

/// Sample quotes used when the simple-price query fails.
pub fn sample_prices() -> HashMap<String, PriceQuote> {
    let quotes = [
        ("bitcoin", 68_452.12, 2.35),
        ("ethereum", 3_521.76, 1.87),
        ("ripple", 0.58, -0.42),
        ("cardano", 0.45, 0.75),
        ("solana", 142.28, 3.52),
        ("polkadot", 7.82, 1.12),
        ("dogecoin", 0.12, -1.25),
    ];

    quotes
        .iter()
        .map(|(id, usd, change)| {
            (id.to_string(), PriceQuote { usd: *usd, usd_24h_change: *change })
        })
        .collect()
}
