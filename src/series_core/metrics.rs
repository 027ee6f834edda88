//! Derived metrics over a completed dataset
//!
//! Consumed by the report binary and the presentation layer. All ratio
//! computations are guarded: a zero volume denominator yields 0, never a
//! NaN or a panic.

use std::cmp::Ordering;

use super::types::ExchangeDataset;

/// Per-exchange monthly sums with the derived efficiency ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeTotals {
    pub name: String,
    pub total_volume: f64,
    pub total_commission: f64,
    /// Commission per unit volume, in percent. 0 when volume is 0.
    pub efficiency: f64,
}

/// Commission-per-volume ratio in percent, 0 on a zero denominator.
pub fn efficiency_pct(total_commission: f64, total_volume: f64) -> f64 {
    if total_volume == 0.0 {
        0.0
    } else {
        total_commission / total_volume * 100.0
    }
}

/// Monthly sums per exchange, in dataset order.
pub fn monthly_totals(dataset: &ExchangeDataset) -> Vec<ExchangeTotals> {
    dataset
        .iter()
        .map(|(name, series)| {
            let total_volume = series.total_monthly_volume();
            let total_commission = series.total_monthly_commission();
            ExchangeTotals {
                name: name.clone(),
                total_volume,
                total_commission,
                efficiency: efficiency_pct(total_commission, total_volume),
            }
        })
        .collect()
}

/// Overall commission rate across all exchanges, in percent.
pub fn overall_commission_rate(totals: &[ExchangeTotals]) -> f64 {
    let volume: f64 = totals.iter().map(|t| t.total_volume).sum();
    let commission: f64 = totals.iter().map(|t| t.total_commission).sum();
    efficiency_pct(commission, volume)
}

/// Rank by efficiency descending. The sort is stable, so ties keep their
/// dataset order.
pub fn rank_by_efficiency(mut totals: Vec<ExchangeTotals>) -> Vec<ExchangeTotals> {
    totals.sort_by(|a, b| {
        b.efficiency.partial_cmp(&a.efficiency).unwrap_or(Ordering::Equal)
    });
    totals
}

/// Format large values with K/M/B suffixes for report output.
pub fn format_large_number(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.2}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        format!("{:.2}", num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series_core::types::ExchangeSeries;

    fn make_series(volume: f64, commission: f64) -> ExchangeSeries {
        ExchangeSeries {
            monthly_periods: vec!["2024-03".to_string()],
            monthly_volume: vec![volume],
            monthly_commission: vec![commission],
            yearly_periods: vec!["2024".to_string()],
            yearly_volume: vec![volume * 12.0],
            yearly_commission: vec![commission * 12.0],
            fee_tiers: vec!["Regular".to_string()],
            maker_fee_rate: vec![0.1],
            taker_fee_rate: vec![0.1],
        }
    }

    #[test]
    fn test_zero_volume_yields_zero_ratio() {
        assert_eq!(efficiency_pct(0.0, 0.0), 0.0);
        assert_eq!(efficiency_pct(123.0, 0.0), 0.0);

        let ratio = efficiency_pct(5.0, 0.0);
        assert!(ratio.is_finite());
    }

    #[test]
    fn test_monthly_totals() {
        let dataset = vec![
            ("A".to_string(), make_series(1000.0, 2.0)),
            ("B".to_string(), make_series(0.0, 0.0)),
        ];
        let totals = monthly_totals(&dataset);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].name, "A");
        assert_eq!(totals[0].total_volume, 1000.0);
        assert!((totals[0].efficiency - 0.2).abs() < 1e-12);
        assert_eq!(totals[1].efficiency, 0.0);
    }

    #[test]
    fn test_overall_commission_rate() {
        let dataset = vec![
            ("A".to_string(), make_series(600.0, 3.0)),
            ("B".to_string(), make_series(400.0, 2.0)),
        ];
        let totals = monthly_totals(&dataset);
        assert!((overall_commission_rate(&totals) - 0.5).abs() < 1e-12);

        assert_eq!(overall_commission_rate(&[]), 0.0);
    }

    #[test]
    fn test_ranking_descending_and_stable() {
        let dataset = vec![
            ("Low".to_string(), make_series(1000.0, 1.0)),
            ("TiedFirst".to_string(), make_series(1000.0, 5.0)),
            ("TiedSecond".to_string(), make_series(2000.0, 10.0)),
            ("High".to_string(), make_series(1000.0, 9.0)),
        ];
        let ranked = rank_by_efficiency(monthly_totals(&dataset));

        assert_eq!(ranked[0].name, "High");
        // Equal efficiencies keep dataset order
        assert_eq!(ranked[1].name, "TiedFirst");
        assert_eq!(ranked[2].name, "TiedSecond");
        assert_eq!(ranked[3].name, "Low");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(512.0), "512.00");
        assert_eq!(format_large_number(1_500.0), "1.50K");
        assert_eq!(format_large_number(2_450_000.0), "2.45M");
        assert_eq!(format_large_number(2_450_000_000_000.0), "2450.00B");
    }
}
