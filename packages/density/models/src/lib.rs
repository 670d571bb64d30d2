#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Station, admin-level, palette, and region aggregate types.
//!
//! These are the plain value types shared by the boundary parser, the
//! density engine, and the CLI. They carry no aggregation logic; the
//! engine in `station_density` owns that.

pub mod color;
pub mod provider;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use color::{Color, LegendStop};
pub use provider::MapProvider;

/// A point-located entity (a charging or swap station) to be counted
/// per administrative region.
///
/// Locality attributes are all optional; upstream station feeds fill
/// them inconsistently. Extra attributes in the source record are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEntity {
    /// Station identifier (e.g. `"LK001"`).
    #[serde(default)]
    pub id: String,
    /// Display name (e.g. "Station Colombo Fort").
    #[serde(default)]
    pub name: Option<String>,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Divisional secretariat / area name.
    #[serde(default)]
    pub area: Option<String>,
    /// District name.
    #[serde(default)]
    pub district: Option<String>,
    /// Province name.
    #[serde(default)]
    pub province: Option<String>,
    /// Legacy alias for `province`, still emitted by older feeds.
    #[serde(default)]
    pub region: Option<String>,
}

impl PointEntity {
    /// Creates a point with only an id and coordinates set.
    #[must_use]
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            latitude,
            longitude,
            area: None,
            district: None,
            province: None,
            region: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the area attribute.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Sets the district attribute.
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Sets the province attribute.
    #[must_use]
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    /// Sets the legacy `region` attribute.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Granularity of administrative region used for aggregation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AdminLevel {
    /// Divisional secretariat areas (ADM3).
    Area,
    /// Districts (ADM2).
    District,
    /// Provinces (ADM1).
    #[default]
    Province,
}

impl AdminLevel {
    /// Returns the boundary property key that names a region at this
    /// level.
    #[must_use]
    pub const fn default_region_key(self) -> &'static str {
        match self {
            Self::Area => "ADM3_EN",
            Self::District => "ADM2_EN",
            Self::Province => "ADM1_EN",
        }
    }

    /// Human-readable label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::District => "District",
            Self::Province => "Province",
        }
    }

    /// Returns all variants of this enum, finest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Area, Self::District, Self::Province]
    }
}

/// Sequential color palette used for the choropleth fill.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Palette {
    /// Yellow-orange-red, the classic heat-map ramp.
    #[default]
    YlOrRd,
    /// Perceptually uniform purple-to-yellow.
    Viridis,
    /// Perceptually uniform blue-to-yellow through magenta.
    Plasma,
    /// Rainbow-like ramp with improved perceptual ordering.
    Turbo,
    /// Colorblind-safe blue-to-yellow.
    Cividis,
}

impl Palette {
    /// Label shown in palette pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::YlOrRd => "YlOrRd (Heatmap)",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Turbo => "Turbo",
            Self::Cividis => "Cividis",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::YlOrRd,
            Self::Viridis,
            Self::Plasma,
            Self::Turbo,
            Self::Cividis,
        ]
    }
}

/// Per-region bucket of matched stations.
///
/// `count` is kept equal to `stations.len()` by only ever growing the
/// bucket through [`RegionAggregate::push`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionAggregate {
    name: String,
    stations: Vec<PointEntity>,
    count: u64,
}

impl RegionAggregate {
    /// Creates an empty bucket for the named region.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stations: Vec::new(),
            count: 0,
        }
    }

    /// Region name as resolved from the boundary feature.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stations matched to this region, in input order.
    #[must_use]
    pub fn stations(&self) -> &[PointEntity] {
        &self.stations
    }

    /// Number of matched stations.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Appends a matched station.
    pub fn push(&mut self, station: PointEntity) {
        self.stations.push(station);
        self.count += 1;
    }
}

/// Summary statistics over one aggregation run.
///
/// `min_count` and `avg_count` only consider regions that received at
/// least one station; both are zero when no region did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of input stations, matched or not.
    pub total_points: u64,
    /// Stations that resolved to no region.
    pub unmatched_points: u64,
    /// Regions with `count > 0`.
    pub total_regions_with_data: u64,
    /// Largest region count (0 when there are no regions).
    pub max_count: u64,
    /// Smallest non-zero region count.
    pub min_count: u64,
    /// Mean over non-zero region counts.
    pub avg_count: f64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn admin_level_parses_case_insensitively() {
        assert_eq!(AdminLevel::from_str("district").unwrap(), AdminLevel::District);
        assert_eq!(AdminLevel::from_str("Province").unwrap(), AdminLevel::Province);
        assert_eq!(AdminLevel::from_str("AREA").unwrap(), AdminLevel::Area);
        assert!(AdminLevel::from_str("county").is_err());
    }

    #[test]
    fn admin_level_default_keys_are_distinct() {
        let keys: Vec<&str> = AdminLevel::all()
            .iter()
            .map(|l| l.default_region_key())
            .collect();
        assert_eq!(keys, vec!["ADM3_EN", "ADM2_EN", "ADM1_EN"]);
    }

    #[test]
    fn palette_names_are_exact() {
        assert_eq!(Palette::from_str("Viridis").unwrap(), Palette::Viridis);
        assert_eq!(Palette::YlOrRd.to_string(), "YlOrRd");
        assert!(Palette::from_str("Magma").is_err());
        assert_eq!(Palette::all().len(), 5);
    }

    #[test]
    fn region_aggregate_count_tracks_stations() {
        let mut agg = RegionAggregate::new("Colombo");
        assert_eq!(agg.count(), 0);
        agg.push(PointEntity::new("a", 6.9, 79.8));
        agg.push(PointEntity::new("b", 6.9, 79.9));
        assert_eq!(agg.count(), 2);
        assert_eq!(agg.stations().len(), 2);
        assert_eq!(agg.name(), "Colombo");
    }

    #[test]
    fn point_entity_ignores_extra_attributes() {
        let json = serde_json::json!({
            "id": "LK001",
            "name": "Station Colombo Fort",
            "latitude": 6.9271,
            "longitude": 79.8612,
            "district": "Colombo",
            "utilization_rate": 82.5,
            "status": "active"
        });
        let point: PointEntity = serde_json::from_value(json).unwrap();
        assert_eq!(point.district.as_deref(), Some("Colombo"));
        assert_eq!(point.province, None);
        assert_eq!(point.name.as_deref(), Some("Station Colombo Fort"));
    }
}
