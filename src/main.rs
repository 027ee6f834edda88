#[cfg(test)]
mod tests;

pub mod catalog;
pub mod config;
pub mod fees;
pub mod fetcher;
pub mod series_core;
pub mod store;

pub use config::Config;
pub use fetcher::{build_dataset, build_dataset_with_basis, CoinGeckoClient};
pub use series_core::{ExchangeDataset, ExchangeSeries, SeriesGenerator, VolumeBasis};
pub use store::{CacheBackend, SqliteCache};
