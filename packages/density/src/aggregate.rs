//! Folding stations into region buckets.

use station_density_models::{AdminLevel, PointEntity, RegionAggregate};

use crate::catalog::RegionCatalog;
use crate::resolve::resolve;

/// Result of one aggregation run: the populated regions plus the
/// stations that could not be placed.
///
/// Every region of the source catalog is present, including those that
/// received no stations. Unmatched stations are not bucketed anywhere;
/// they only show up in [`Aggregation::unmatched_count`] and
/// [`Aggregation::total_points`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    regions: RegionCatalog,
    unmatched: u64,
    total_points: u64,
}

impl Aggregation {
    /// An aggregation with no regions, where every station is unmatched.
    #[must_use]
    pub fn unmatched_only(total_points: u64) -> Self {
        Self {
            regions: RegionCatalog::default(),
            unmatched: total_points,
            total_points,
        }
    }

    /// Populated regions in catalog order.
    #[must_use]
    pub const fn regions(&self) -> &RegionCatalog {
        &self.regions
    }

    /// Looks up a populated region by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegionAggregate> {
        self.regions.get(name)
    }

    /// Count for a region, zero for unknown names.
    #[must_use]
    pub fn count_of(&self, name: &str) -> u64 {
        self.get(name).map_or(0, RegionAggregate::count)
    }

    /// Stations that resolved to no region.
    #[must_use]
    pub const fn unmatched_count(&self) -> u64 {
        self.unmatched
    }

    /// Stations seen, matched or not.
    #[must_use]
    pub const fn total_points(&self) -> u64 {
        self.total_points
    }

    /// Sum of all region counts.
    #[must_use]
    pub fn matched_count(&self) -> u64 {
        self.regions.iter().map(RegionAggregate::count).sum()
    }

    /// Largest region count, zero when there are no regions.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.regions
            .iter()
            .map(RegionAggregate::count)
            .max()
            .unwrap_or(0)
    }

    /// Regions with at least one station, by descending count. Ties keep
    /// catalog order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&RegionAggregate> {
        let mut ranked: Vec<&RegionAggregate> =
            self.regions.iter().filter(|r| r.count() > 0).collect();
        ranked.sort_by(|a, b| b.count().cmp(&a.count()));
        ranked
    }
}

/// Resolves every station against `catalog` and counts them per region.
///
/// `catalog` is left untouched; the result holds a fresh copy that has
/// been filled in. Stations are visited in input order, so each region's
/// station list preserves that order and the result is identical across
/// runs for identical inputs.
#[must_use]
pub fn aggregate(catalog: &RegionCatalog, points: &[PointEntity], level: AdminLevel) -> Aggregation {
    let mut regions = catalog.clone();
    let mut unmatched = 0u64;

    for point in points {
        match resolve(catalog, point, level).index() {
            Some(index) => regions.push_station(index, point.clone()),
            None => unmatched += 1,
        }
    }

    let total_points = points.len() as u64;
    log::debug!(
        "Aggregated {total_points} stations into {} {level} regions ({unmatched} unmatched)",
        regions.len()
    );

    Aggregation {
        regions,
        unmatched,
        total_points,
    }
}
