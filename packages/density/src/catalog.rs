//! Region catalog built from a boundary dataset.
//!
//! The catalog is the set of region names a station can be counted
//! against at one admin level. It is derived from the boundary features
//! alone and never looks at station data.

use std::collections::BTreeMap;

use station_density_boundary::{BoundaryDataset, resolve_feature_name};
use station_density_models::{AdminLevel, PointEntity, RegionAggregate};

/// Insertion-ordered set of named, initially empty region buckets.
///
/// Iteration order is the order in which names first appear in the
/// boundary dataset. Fuzzy name resolution scans regions in this order,
/// so it is part of the catalog's contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionCatalog {
    regions: Vec<RegionAggregate>,
    /// Lowercased region names, parallel to `regions`.
    lowered: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl RegionCatalog {
    /// Builds a catalog from a boundary dataset.
    ///
    /// Each feature's name is read with `region_key` if given, otherwise
    /// with the level's default key (both falling back through the other
    /// admin keys and `NAME`). Features with no resolvable name are
    /// skipped. When several features share a name (multi-part regions
    /// split across features), the region keeps the position of its
    /// first feature.
    #[must_use]
    pub fn build(dataset: &BoundaryDataset, level: AdminLevel, region_key: Option<&str>) -> Self {
        let preferred_key = region_key.unwrap_or_else(|| level.default_region_key());

        let mut catalog = Self::default();
        let mut unnamed = 0usize;

        for feature in dataset.features() {
            match resolve_feature_name(feature, preferred_key) {
                Some(name) => catalog.insert(name),
                None => unnamed += 1,
            }
        }

        if unnamed > 0 {
            log::warn!(
                "Skipped {unnamed} of {} boundary features with no name under '{preferred_key}' or fallback keys",
                dataset.len()
            );
        }
        log::debug!(
            "Built {} catalog with {} regions (key '{preferred_key}')",
            level,
            catalog.len()
        );

        catalog
    }

    /// Builds a catalog directly from region names, in order.
    ///
    /// Duplicate names keep their first position.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for name in names {
            catalog.insert(name.into());
        }
        catalog
    }

    fn insert(&mut self, name: String) {
        if self.index.contains_key(&name) {
            return;
        }
        self.index.insert(name.clone(), self.regions.len());
        self.lowered.push(name.to_lowercase());
        self.regions.push(RegionAggregate::new(name));
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the catalog has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Position of an exact region name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether `name` is exactly a region name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a region by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegionAggregate> {
        self.position(name).map(|i| &self.regions[i])
    }

    /// Region at `index` in catalog order.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&RegionAggregate> {
        self.regions.get(index)
    }

    /// Region names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(RegionAggregate::name)
    }

    /// Regions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionAggregate> {
        self.regions.iter()
    }

    /// Lowercased region names in catalog order, for case-insensitive
    /// matching.
    pub(crate) fn lowered_names(&self) -> impl Iterator<Item = &str> {
        self.lowered.iter().map(String::as_str)
    }

    /// Adds a station to the region at `index`.
    pub(crate) fn push_station(&mut self, index: usize, station: PointEntity) {
        if let Some(region) = self.regions.get_mut(index) {
            region.push(station);
        }
    }
}
