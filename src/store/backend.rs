//! Cache backend trait
//!
//! The cache is replaceable: anything that can hold the dataset wholesale
//! qualifies. The SQLite implementation lives in [`super::sqlite`].

use async_trait::async_trait;
use std::collections::HashMap;

use crate::fetcher::{NewsItem, PriceQuote};
use crate::series_core::ExchangeDataset;

#[derive(Debug)]
pub enum StoreError {
    Database(rusqlite::Error),
    /// Stored rows that cannot be mapped back onto the dataset shape.
    Corrupt(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "Database error: {}", e),
            StoreError::Corrupt(msg) => write!(f, "Corrupt cache: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Backend trait for the dashboard cache
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Bulk-write the dataset, all rows in one transaction.
    ///
    /// Skipped when the cache already holds exchange data; returns whether
    /// anything was written.
    async fn init_exchange_data(&self, dataset: &ExchangeDataset) -> Result<bool, StoreError>;

    /// Read the whole dataset back, in stored (catalog) order.
    async fn load_exchange_data(&self) -> Result<ExchangeDataset, StoreError>;

    /// Replace cached prices for the tracked coins.
    async fn store_prices(&self, prices: &HashMap<String, PriceQuote>) -> Result<(), StoreError>;

    async fn load_prices(&self) -> Result<HashMap<String, PriceQuote>, StoreError>;

    /// Replace cached news items.
    async fn store_news(&self, items: &[NewsItem]) -> Result<(), StoreError>;

    async fn load_news(&self) -> Result<Vec<NewsItem>, StoreError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
