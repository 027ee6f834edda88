//! Tiered maker/taker fee schedules per exchange
//!
//! Exchanges with published fee tables get the literal table; everything
//! else gets a synthetic descending schedule. Resolution is a lookup into
//! an explicit policy mapping, so adding an exchange means adding a row,
//! not another string comparison.
//!
//! Rates are in percent units throughout (0.100 means 0.100%).

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Resolved fee schedule: tier labels (lowest privilege first) with
/// parallel maker/taker rate arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub tiers: Vec<String>,
    pub maker: Vec<f64>,
    pub taker: Vec<f64>,
}

impl FeeSchedule {
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Mean taker rate across tiers, in percent. None for an empty table.
    pub fn avg_taker(&self) -> Option<f64> {
        if self.taker.is_empty() {
            return None;
        }
        Some(self.taker.iter().sum::<f64>() / self.taker.len() as f64)
    }
}

/// A published fee table, reproduced from exchange documentation.
#[derive(Debug)]
pub struct KnownSchedule {
    pub tiers: &'static [&'static str],
    pub maker: &'static [f64],
    pub taker: &'static [f64],
}

impl KnownSchedule {
    fn to_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            tiers: self.tiers.iter().map(|t| t.to_string()).collect(),
            maker: self.maker.to_vec(),
            taker: self.taker.to_vec(),
        }
    }
}

const DEFAULT_TIERS: [&str; 6] = ["Regular", "VIP 1", "VIP 2", "VIP 3", "VIP 4", "VIP 5"];

const BINANCE: KnownSchedule = KnownSchedule {
    tiers: &[
        "Regular", "VIP 1", "VIP 2", "VIP 3", "VIP 4", "VIP 5", "VIP 6", "VIP 7", "VIP 8",
        "VIP 9",
    ],
    maker: &[0.100, 0.090, 0.080, 0.070, 0.060, 0.050, 0.040, 0.030, 0.020, 0.015],
    taker: &[0.100, 0.090, 0.080, 0.070, 0.060, 0.050, 0.040, 0.030, 0.020, 0.015],
};

const COINBASE: KnownSchedule = KnownSchedule {
    tiers: &["Regular", "Level 1", "Level 2", "Level 3", "Level 4"],
    maker: &[0.400, 0.350, 0.250, 0.150, 0.050],
    taker: &[0.600, 0.450, 0.350, 0.250, 0.150],
};

const KRAKEN: KnownSchedule = KnownSchedule {
    tiers: &["Regular", "Intermediate", "Pro", "VIP", "Institutional"],
    maker: &[0.160, 0.140, 0.120, 0.080, 0.020],
    taker: &[0.260, 0.240, 0.220, 0.180, 0.120],
};

const BYBIT: KnownSchedule = KnownSchedule {
    tiers: &["Regular", "VIP 1", "VIP 2", "VIP 3", "VIP 4", "VIP 5"],
    maker: &[0.100, 0.080, 0.060, 0.040, 0.020, 0.000],
    taker: &[0.100, 0.080, 0.060, 0.040, 0.020, 0.000],
};

const KUCOIN: KnownSchedule = KnownSchedule {
    tiers: &["Regular", "VIP 1", "VIP 2", "VIP 3", "VIP 4", "VIP 5"],
    maker: &[0.100, 0.090, 0.080, 0.070, 0.060, 0.050],
    taker: &[0.100, 0.090, 0.080, 0.070, 0.060, 0.050],
};

const KNOWN_SCHEDULES: [(&str, &KnownSchedule); 5] = [
    ("Binance", &BINANCE),
    ("Coinbase", &COINBASE),
    ("Kraken", &KRAKEN),
    ("Bybit", &BYBIT),
    ("Kucoin", &KUCOIN),
];

/// Parameters for the synthetic descending schedule.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticFeeParams {
    /// Base maker rate is drawn uniformly from this half-open range.
    pub base_maker_range: (f64, f64),
    /// Base taker = base maker times this factor.
    pub taker_multiplier: f64,
    /// Flat reduction applied per tier index.
    pub tier_step: f64,
    pub maker_floor: f64,
    pub taker_floor: f64,
}

impl Default for SyntheticFeeParams {
    fn default() -> Self {
        Self {
            base_maker_range: (0.075, 0.15),
            taker_multiplier: 1.5,
            tier_step: 0.02,
            maker_floor: 0.01,
            taker_floor: 0.02,
        }
    }
}

/// How a given exchange's fee schedule is produced.
#[derive(Debug)]
pub enum FeePolicy {
    Known(&'static KnownSchedule),
    Synthetic(SyntheticFeeParams),
}

/// Map an exchange identifier to its fee policy. Total over any string.
pub fn policy(exchange: &str) -> FeePolicy {
    KNOWN_SCHEDULES
        .iter()
        .find(|(name, _)| *name == exchange)
        .map(|&(_, schedule)| FeePolicy::Known(schedule))
        .unwrap_or_else(|| FeePolicy::Synthetic(SyntheticFeeParams::default()))
}

/// Resolve the fee schedule for an exchange.
///
/// Known exchanges are deterministic and ignore the rng. Everything else
/// gets a fresh synthetic schedule: descending from a random base, floored,
/// rounded to 3 decimals.
pub fn resolve<R: Rng>(exchange: &str, rng: &mut R) -> FeeSchedule {
    match policy(exchange) {
        FeePolicy::Known(schedule) => schedule.to_schedule(),
        FeePolicy::Synthetic(params) => synthetic_schedule(&params, rng),
    }
}

fn synthetic_schedule<R: Rng>(params: &SyntheticFeeParams, rng: &mut R) -> FeeSchedule {
    let (lo, hi) = params.base_maker_range;
    let base_maker = rng.gen_range(lo..hi);
    let base_taker = base_maker * params.taker_multiplier;

    let mut maker = Vec::with_capacity(DEFAULT_TIERS.len());
    let mut taker = Vec::with_capacity(DEFAULT_TIERS.len());

    for tier in 0..DEFAULT_TIERS.len() {
        let reduction = tier as f64 * params.tier_step;
        maker.push(round3((base_maker - reduction).max(params.maker_floor)));
        taker.push(round3((base_taker - reduction).max(params.taker_floor)));
    }

    FeeSchedule {
        tiers: DEFAULT_TIERS.iter().map(|t| t.to_string()).collect(),
        maker,
        taker,
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_binance_literal_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let schedule = resolve("Binance", &mut rng);

        let expected = [0.100, 0.090, 0.080, 0.070, 0.060, 0.050, 0.040, 0.030, 0.020, 0.015];
        assert_eq!(schedule.tier_count(), 10);
        assert_eq!(schedule.maker, expected);
        assert_eq!(schedule.taker, expected);
        assert_eq!(schedule.tiers[0], "Regular");
        assert_eq!(schedule.tiers[9], "VIP 9");
    }

    #[test]
    fn test_coinbase_taker_exceeds_maker() {
        let mut rng = StdRng::seed_from_u64(1);
        let schedule = resolve("Coinbase", &mut rng);

        assert_eq!(schedule.tier_count(), 5);
        assert_eq!(schedule.maker, [0.400, 0.350, 0.250, 0.150, 0.050]);
        assert_eq!(schedule.taker, [0.600, 0.450, 0.350, 0.250, 0.150]);
        for (m, t) in schedule.maker.iter().zip(&schedule.taker) {
            assert!(t > m);
        }
    }

    #[test]
    fn test_known_resolution_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = resolve("Kraken", &mut rng);
        let second = resolve("Kraken", &mut rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_synthetic_schedule_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let schedule = resolve("SomeNewExchange", &mut rng);

        assert_eq!(schedule.tier_count(), 6);
        assert_eq!(schedule.maker.len(), schedule.tiers.len());
        assert_eq!(schedule.taker.len(), schedule.tiers.len());

        for i in 1..schedule.tier_count() {
            assert!(schedule.maker[i] <= schedule.maker[i - 1]);
            assert!(schedule.taker[i] <= schedule.taker[i - 1]);
        }
        for (m, t) in schedule.maker.iter().zip(&schedule.taker) {
            assert!(*m >= 0.01);
            assert!(*t >= 0.02);
        }
    }

    #[test]
    fn test_synthetic_base_within_range() {
        // Tier 0 carries the undiminished base rates
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let schedule = resolve("UnlistedExchange", &mut rng);
            assert!(schedule.maker[0] >= 0.075 && schedule.maker[0] <= 0.15);
            assert!(schedule.taker[0] >= round3(schedule.maker[0] * 1.5) - 0.001);
        }
    }

    #[test]
    fn test_synthetic_varies_but_keeps_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let schedules: Vec<FeeSchedule> =
            (0..5).map(|_| resolve("UnlistedExchange", &mut rng)).collect();

        for s in &schedules {
            assert_eq!(s.tier_count(), schedules[0].tier_count());
            assert_eq!(s.tiers, schedules[0].tiers);
        }
        // Numeric values are rng-dependent
        assert!(schedules.iter().any(|s| s.maker != schedules[0].maker));
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        let mut rng = StdRng::seed_from_u64(11);
        let schedule = resolve("UnlistedExchange", &mut rng);
        for rate in schedule.maker.iter().chain(&schedule.taker) {
            assert_eq!(*rate, round3(*rate));
        }
    }

    #[test]
    fn test_avg_taker() {
        let schedule = FeeSchedule {
            tiers: vec!["Regular".to_string(), "VIP 1".to_string()],
            maker: vec![0.1, 0.05],
            taker: vec![0.2, 0.1],
        };
        assert_eq!(schedule.avg_taker(), Some(0.15000000000000002));

        let empty = FeeSchedule { tiers: vec![], maker: vec![], taker: vec![] };
        assert_eq!(empty.avg_taker(), None);
    }
}
