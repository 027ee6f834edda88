//! Upstream market data with literal fallbacks
//!
//! The dashboard dataset is always generated locally; the live upstream
//! only contributes the volume base magnitude (top-10 market cap) and the
//! side data (global stats, news, prices). Any upstream failure degrades
//! to fallbacks without surfacing an error.

pub mod coingecko;
pub mod fallback;

pub use coingecko::{
    CoinGeckoClient, CoinMarket, GlobalMarket, NewsItem, PriceQuote, TRACKED_COINS,
};

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::catalog;
use crate::fees;
use crate::series_core::{ExchangeDataset, GeneratorError, SeriesGenerator, VolumeBasis};

/// Summed market cap of the top 10 coins, rows with no cap counting as 0.
pub fn top10_market_cap(markets: &[CoinMarket]) -> f64 {
    markets.iter().take(10).filter_map(|c| c.market_cap).sum()
}

/// Build the full dataset for every cataloged exchange.
///
/// The volume basis is picked once per run: live market caps when the
/// markets query succeeds with usable rows, the synchronous synthetic
/// fallback otherwise (no retry). Fee resolution and series generation are
/// local either way.
pub async fn build_dataset<R: Rng>(
    client: &CoinGeckoClient,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<ExchangeDataset, GeneratorError> {
    let basis = match client.fetch_market_data().await {
        Ok(markets) => {
            let cap = top10_market_cap(&markets);
            if cap > 0.0 {
                log::info!("📈 Live market data: top-10 cap ${:.0}", cap);
                VolumeBasis::MarketCap { top10_cap_usd: cap }
            } else {
                log::warn!("Market data had no usable caps, generating synthetic series");
                VolumeBasis::Synthetic
            }
        }
        Err(e) => {
            log::warn!("Market data fetch failed ({}), generating synthetic series", e);
            VolumeBasis::Synthetic
        }
    };

    build_dataset_with_basis(basis, now, rng)
}

/// Generate the dataset for a known basis. Split out so the fallback path
/// and tests can run without a client.
pub fn build_dataset_with_basis<R: Rng>(
    basis: VolumeBasis,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<ExchangeDataset, GeneratorError> {
    let mut dataset = Vec::new();
    for exchange in catalog::list_exchanges() {
        let schedule = fees::resolve(exchange, rng);
        let series = SeriesGenerator::generate(exchange, &schedule, basis, now, rng)?;
        dataset.push((exchange.to_string(), series));
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_top10_cap_skips_missing_rows() {
        let mut markets = fallback::sample_market_data();
        markets[2].market_cap = None;
        // Tether's 100B drops out of the 1.86T sample total
        assert_eq!(top10_market_cap(&markets), 1_760_000_000_000.0);
    }

    #[test]
    fn test_dataset_covers_catalog_in_order() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let dataset =
            build_dataset_with_basis(VolumeBasis::Synthetic, now, &mut rng).unwrap();

        let names: Vec<&str> = dataset.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, catalog::list_exchanges());
    }

    #[test]
    fn test_dataset_series_carry_resolved_schedules() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let dataset =
            build_dataset_with_basis(VolumeBasis::Synthetic, now, &mut rng).unwrap();

        let binance = &dataset[0].1;
        assert_eq!(binance.fee_tiers.len(), 10);
        // Unlisted-table exchanges get the 6-tier synthetic schedule
        let upbit = dataset.iter().find(|(name, _)| name == "Upbit").unwrap();
        assert_eq!(upbit.1.fee_tiers.len(), 6);
    }
}
