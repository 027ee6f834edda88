//! The series record handed to the cache and the presentation layer

use serde::{Deserialize, Serialize};

/// Full generated dataset, in catalog order. Order is preserved through the
/// cache so that ranking tie-breaks stay stable.
pub type ExchangeDataset = Vec<(String, ExchangeSeries)>;

/// One exchange's complete series set. Constructed fresh per generation
/// run and never mutated afterwards.
///
/// Sequences sharing a cadence are index-aligned: `monthly_volume[i]`
/// belongs to `monthly_periods[i]`, and likewise for yearly and fee arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSeries {
    /// 12 "YYYY-MM" labels, oldest first.
    pub monthly_periods: Vec<String>,
    pub monthly_volume: Vec<f64>,
    pub monthly_commission: Vec<f64>,
    /// 8 "YYYY" labels, oldest first.
    pub yearly_periods: Vec<String>,
    pub yearly_volume: Vec<f64>,
    pub yearly_commission: Vec<f64>,
    /// Tier labels, lowest privilege first.
    pub fee_tiers: Vec<String>,
    /// Percent rates parallel to `fee_tiers`.
    pub maker_fee_rate: Vec<f64>,
    pub taker_fee_rate: Vec<f64>,
}

impl ExchangeSeries {
    /// Monthly volume sum, the basis for most dashboard aggregates.
    pub fn total_monthly_volume(&self) -> f64 {
        self.monthly_volume.iter().sum()
    }

    pub fn total_monthly_commission(&self) -> f64 {
        self.monthly_commission.iter().sum()
    }
}
