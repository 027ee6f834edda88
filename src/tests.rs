//! Cross-module properties of the generated dataset

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::fetcher::build_dataset_with_basis;
use crate::series_core::{metrics, VolumeBasis};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_full_dataset_invariants() {
    for basis in [
        VolumeBasis::Synthetic,
        VolumeBasis::MarketCap { top10_cap_usd: 1_860_000_000_000.0 },
    ] {
        let mut rng = StdRng::seed_from_u64(2024);
        let dataset = build_dataset_with_basis(basis, fixed_now(), &mut rng).unwrap();
        assert_eq!(dataset.len(), 9);

        for (name, series) in &dataset {
            assert_eq!(series.monthly_periods.len(), 12, "{}", name);
            assert_eq!(series.monthly_volume.len(), 12, "{}", name);
            assert_eq!(series.monthly_commission.len(), 12, "{}", name);
            assert_eq!(series.yearly_periods.len(), 8, "{}", name);
            assert_eq!(series.yearly_volume.len(), 8, "{}", name);
            assert_eq!(series.yearly_commission.len(), 8, "{}", name);

            let tiers = series.fee_tiers.len();
            assert!((5..=10).contains(&tiers), "{}: {} tiers", name, tiers);
            assert_eq!(series.maker_fee_rate.len(), tiers);
            assert_eq!(series.taker_fee_rate.len(), tiers);

            for v in series.monthly_volume.iter().chain(&series.yearly_volume) {
                assert!(*v >= 0.0);
            }
            for c in series.monthly_commission.iter().chain(&series.yearly_commission) {
                assert!(*c >= 0.0);
            }
            for r in series.maker_fee_rate.iter().chain(&series.taker_fee_rate) {
                assert!(*r >= 0.0);
            }

            assert_eq!(series.monthly_periods.last().unwrap(), "2024-03");
            assert_eq!(series.yearly_periods.last().unwrap(), "2024");
        }
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let mut first_rng = StdRng::seed_from_u64(777);
    let mut second_rng = StdRng::seed_from_u64(777);

    let first =
        build_dataset_with_basis(VolumeBasis::Synthetic, fixed_now(), &mut first_rng).unwrap();
    let second =
        build_dataset_with_basis(VolumeBasis::Synthetic, fixed_now(), &mut second_rng).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_metrics_over_generated_dataset() {
    let mut rng = StdRng::seed_from_u64(55);
    let dataset =
        build_dataset_with_basis(VolumeBasis::Synthetic, fixed_now(), &mut rng).unwrap();

    let totals = metrics::monthly_totals(&dataset);
    assert_eq!(totals.len(), dataset.len());

    // Commission is a bounded fraction of volume, so every efficiency lands
    // in a sane percent range and the overall rate does too.
    for t in &totals {
        assert!(t.total_volume > 0.0);
        assert!(t.efficiency > 0.0 && t.efficiency < 1.0, "{}: {}", t.name, t.efficiency);
    }
    let overall = metrics::overall_commission_rate(&totals);
    assert!(overall > 0.0 && overall < 1.0);

    let ranked = metrics::rank_by_efficiency(totals);
    for pair in ranked.windows(2) {
        assert!(pair[0].efficiency >= pair[1].efficiency);
    }
}
