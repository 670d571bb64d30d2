//! Summary statistics over an aggregation.

use station_density_models::{RegionAggregate, SummaryStats};

use crate::aggregate::Aggregation;

/// Computes header/legend statistics for an aggregation.
///
/// `min_count` and `avg_count` are taken over regions that received at
/// least one station.
#[must_use]
pub fn summarize(aggregation: &Aggregation) -> SummaryStats {
    let active: Vec<u64> = aggregation
        .regions()
        .iter()
        .map(RegionAggregate::count)
        .filter(|&c| c > 0)
        .collect();

    let total_regions_with_data = active.len() as u64;
    let min_count = active.iter().copied().min().unwrap_or(0);
    #[allow(clippy::cast_precision_loss)]
    let avg_count = if active.is_empty() {
        0.0
    } else {
        active.iter().sum::<u64>() as f64 / active.len() as f64
    };

    SummaryStats {
        total_points: aggregation.total_points(),
        unmatched_points: aggregation.unmatched_count(),
        total_regions_with_data,
        max_count: aggregation.max_count(),
        min_count,
        avg_count,
    }
}
