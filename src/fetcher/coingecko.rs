//! CoinGecko API Integration
//!
//! Best-effort upstream queries for the dashboard:
//! - Coin markets (top coins by market cap, used to scale volume bases)
//! - Global market stats (total cap, volume, dominance percentages)
//! - News headlines
//! - Simple prices for the tracked coin set
//!
//! ## API Reference
//!
//! Base: https://api.coingecko.com/api/v3
//! Endpoints: /coins/markets, /global, /news, /simple/price
//!
//! Every public fetch except the raw markets query is total: a non-success
//! status, timeout, or decode error logs a warning and substitutes the
//! literal fallback dataset.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;

use super::fallback;
use crate::config::Config;

/// Coins cached by the simple-price query: (api id, display name, symbol).
pub const TRACKED_COINS: [(&str, &str, &str); 7] = [
    ("bitcoin", "Bitcoin", "BTC"),
    ("ethereum", "Ethereum", "ETH"),
    ("ripple", "XRP", "XRP"),
    ("cardano", "Cardano", "ADA"),
    ("solana", "Solana", "SOL"),
    ("polkadot", "Polkadot", "DOT"),
    ("dogecoin", "Dogecoin", "DOGE"),
];

/// One coin row from /coins/markets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
}

/// Aggregate stats from /global, flattened to USD figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalMarket {
    pub total_market_cap: f64,
    pub total_volume: f64,
    /// Dominance percentages keyed by symbol (lowercase).
    pub market_cap_percentage: HashMap<String, f64>,
    pub market_cap_change_24h: f64,
}

/// One headline record from /news.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_at: String,
}

/// Current price and 24h change from /simple/price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceQuote {
    pub usd: f64,
    #[serde(default)]
    pub usd_24h_change: f64,
}

#[derive(Debug, Deserialize)]
struct GlobalResponse {
    data: GlobalData,
}

#[derive(Debug, Deserialize)]
struct GlobalData {
    total_market_cap: HashMap<String, f64>,
    total_volume: HashMap<String, f64>,
    market_cap_percentage: HashMap<String, f64>,
    market_cap_change_percentage_24h_usd: f64,
}

pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
    news_limit: usize,
}

impl CoinGeckoClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            news_limit: config.news_limit,
        })
    }

    /// Fetch the top coins by market cap.
    ///
    /// Raw query: callers decide how to fall back, since a failure here
    /// switches the whole generation run to the synthetic volume basis
    /// rather than substituting sample rows.
    pub async fn fetch_market_data(&self) -> Result<Vec<CoinMarket>, Box<dyn Error>> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1",
            self.base_url
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("CoinGecko API error: {}", response.status()).into());
        }

        let markets: Vec<CoinMarket> = response.json().await?;
        Ok(markets)
    }

    /// Fetch global market stats, substituting the sample snapshot on any
    /// failure.
    pub async fn fetch_global_market(&self) -> GlobalMarket {
        match self.try_global_market().await {
            Ok(global) => global,
            Err(e) => {
                log::warn!("Global market fetch failed ({}), using sample data", e);
                fallback::sample_global_market()
            }
        }
    }

    async fn try_global_market(&self) -> Result<GlobalMarket, Box<dyn Error>> {
        let url = format!("{}/global", self.base_url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("CoinGecko API error: {}", response.status()).into());
        }

        let body: GlobalResponse = response.json().await?;
        let total_market_cap = body
            .data
            .total_market_cap
            .get("usd")
            .copied()
            .ok_or("global response missing usd market cap")?;
        let total_volume = body
            .data
            .total_volume
            .get("usd")
            .copied()
            .ok_or("global response missing usd volume")?;

        Ok(GlobalMarket {
            total_market_cap,
            total_volume,
            market_cap_percentage: body.data.market_cap_percentage,
            market_cap_change_24h: body.data.market_cap_change_percentage_24h_usd,
        })
    }

    /// Fetch the latest headlines, substituting the samples on any failure.
    pub async fn fetch_crypto_news(&self) -> Vec<NewsItem> {
        match self.try_crypto_news().await {
            Ok(mut items) if !items.is_empty() => {
                items.truncate(self.news_limit);
                items
            }
            Ok(_) => {
                log::warn!("News query returned no items, using sample headlines");
                fallback::sample_news(chrono::Utc::now())
            }
            Err(e) => {
                log::warn!("News fetch failed ({}), using sample headlines", e);
                fallback::sample_news(chrono::Utc::now())
            }
        }
    }

    async fn try_crypto_news(&self) -> Result<Vec<NewsItem>, Box<dyn Error>> {
        let url = format!("{}/news", self.base_url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("CoinGecko API error: {}", response.status()).into());
        }

        let items: Vec<NewsItem> = response.json().await?;
        Ok(items)
    }

    /// Fetch current prices for the tracked coins, substituting the sample
    /// quotes on any failure.
    pub async fn fetch_simple_prices(&self) -> HashMap<String, PriceQuote> {
        match self.try_simple_prices().await {
            Ok(prices) if !prices.is_empty() => prices,
            Ok(_) => {
                log::warn!("Price query returned no quotes, using sample prices");
                fallback::sample_prices()
            }
            Err(e) => {
                log::warn!("Price fetch failed ({}), using sample prices", e);
                fallback::sample_prices()
            }
        }
    }

    async fn try_simple_prices(&self) -> Result<HashMap<String, PriceQuote>, Box<dyn Error>> {
        let ids: Vec<&str> = TRACKED_COINS.iter().map(|(id, _, _)| *id).collect();
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.base_url,
            ids.join(",")
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("CoinGecko API error: {}", response.status()).into());
        }

        let prices: HashMap<String, PriceQuote> = response.json().await?;
        Ok(prices)
    }
}
