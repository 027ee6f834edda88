//! Synthetic volume/commission series generation
//!
//! One exchange per call. Volume follows a seasonality/trend/noise model on
//! the monthly cadence and a quadratic growth curve on the yearly cadence;
//! commission is always derived from volume and the tier-averaged taker
//! rate, never drawn independently.
//!
//! Commission uses a single unit convention on both volume bases:
//! `commission = volume * avg_taker_pct / 100`.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::f64::consts::PI;

use super::periods::{monthly_labels, yearly_labels, MONTHLY_POINTS, YEARLY_POINTS};
use super::types::ExchangeSeries;
use crate::catalog;
use crate::fees::FeeSchedule;

#[derive(Debug)]
pub enum GeneratorError {
    /// Fee schedule with no tiers; the average taker rate is undefined.
    EmptyFeeSchedule(String),
    /// Tier/maker/taker arrays of differing lengths.
    MisalignedFeeSchedule(String),
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::EmptyFeeSchedule(ex) => {
                write!(f, "empty fee schedule for exchange {}", ex)
            }
            GeneratorError::MisalignedFeeSchedule(ex) => {
                write!(f, "misaligned fee schedule arrays for exchange {}", ex)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// How the per-exchange base volume magnitude is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeBasis {
    /// Live path: scaled from the summed market cap of the top 10 coins,
    /// weighted by the exchange's market share, normalized to millions.
    MarketCap { top10_cap_usd: f64 },
    /// Fallback path: uniform draw scaled by the exchange size class.
    Synthetic,
}

pub struct SeriesGenerator;

impl SeriesGenerator {
    /// Generate the full series set for one exchange.
    ///
    /// Pure computation: the only failure is a malformed fee schedule.
    /// Randomness comes from the injected rng, the current date from `now`,
    /// so callers (and tests) control both.
    pub fn generate<R: Rng>(
        exchange: &str,
        schedule: &FeeSchedule,
        basis: VolumeBasis,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<ExchangeSeries, GeneratorError> {
        if schedule.maker.len() != schedule.tiers.len()
            || schedule.taker.len() != schedule.tiers.len()
        {
            return Err(GeneratorError::MisalignedFeeSchedule(exchange.to_string()));
        }
        let avg_taker = schedule
            .avg_taker()
            .ok_or_else(|| GeneratorError::EmptyFeeSchedule(exchange.to_string()))?;
        // Percent to fraction
        let rate = avg_taker / 100.0;

        let base = monthly_base(exchange, basis, rng);

        let mut monthly_volume = Vec::with_capacity(MONTHLY_POINTS);
        let mut monthly_commission = Vec::with_capacity(MONTHLY_POINTS);
        for i in 0..MONTHLY_POINTS {
            let season = 1.0 + 0.2 * (i as f64 / 6.0 * PI).sin();
            let trend = 1.0 + i as f64 / 24.0;
            let noise = rng.gen_range(0.8..1.2);

            let volume = round2(base * season * trend * noise);
            monthly_volume.push(volume);
            monthly_commission.push(round2(volume * rate));
        }

        let yearly_base = base * 12.0;
        let mut yearly_volume = Vec::with_capacity(YEARLY_POINTS);
        let mut yearly_commission = Vec::with_capacity(YEARLY_POINTS);
        for i in 0..YEARLY_POINTS {
            let growth = growth_factor(basis, i);
            let noise = rng.gen_range(0.9..1.1);

            let volume = round2(yearly_base * growth * noise);
            yearly_volume.push(volume);
            yearly_commission.push(round2(volume * rate));
        }

        Ok(ExchangeSeries {
            monthly_periods: monthly_labels(now),
            monthly_volume,
            monthly_commission,
            yearly_periods: yearly_labels(now),
            yearly_volume,
            yearly_commission,
            fee_tiers: schedule.tiers.clone(),
            maker_fee_rate: schedule.maker.clone(),
            taker_fee_rate: schedule.taker.clone(),
        })
    }
}

fn monthly_base<R: Rng>(exchange: &str, basis: VolumeBasis, rng: &mut R) -> f64 {
    match basis {
        VolumeBasis::MarketCap { top10_cap_usd } => {
            let scale = catalog::market_share(exchange) * 10.0;
            top10_cap_usd * 0.01 * scale / 1_000_000.0
        }
        VolumeBasis::Synthetic => {
            let (lo, hi) = catalog::size_class(exchange).scale_range();
            let scale = rng.gen_range(lo..hi);
            rng.gen_range(500.0..2000.0) * scale
        }
    }
}

/// Yearly growth curve, index 0 oldest. The market-cap path starts from a
/// small fraction of today's magnitude; the synthetic path starts at 1x.
fn growth_factor(basis: VolumeBasis, i: usize) -> f64 {
    let x = i as f64 / 5.0;
    match basis {
        VolumeBasis::MarketCap { .. } => (0.2 + x) * (0.2 + x),
        VolumeBasis::Synthetic => (1.0 + x) * (1.0 + x),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
