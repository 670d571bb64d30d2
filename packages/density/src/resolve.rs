//! Station-to-region name resolution.
//!
//! Station feeds and boundary files name the same region differently
//! ("Western" vs "Western Province", "colombo" vs "Colombo"). Resolution
//! first looks for an exact region name among the station's candidate
//! names and only then falls back to case-insensitive substring matching.

use station_density_models::{AdminLevel, PointEntity};

use crate::catalog::RegionCatalog;

/// Outcome of resolving one station against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A candidate name is exactly a region name. Holds the region's
    /// catalog position.
    Exact(usize),
    /// A candidate name and a region name contain one another,
    /// ignoring case. Holds the region's catalog position.
    Fuzzy(usize),
    /// No candidate matched any region.
    Unmatched,
}

impl Resolution {
    /// Catalog position of the matched region, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Exact(i) | Self::Fuzzy(i) => Some(i),
            Self::Unmatched => None,
        }
    }
}

/// Ordered candidate region names for a station at `level`.
///
/// * district: `district`
/// * province: `province`, then the legacy `region`
/// * area: `area`, then `region`, then the station name
///
/// Missing attributes are dropped, and so are whitespace-only ones: a
/// blank candidate would substring-match every region, so it is
/// treated as absent rather than kept as a name. The remaining order
/// is preserved.
#[must_use]
pub fn candidate_names(point: &PointEntity, level: AdminLevel) -> Vec<&str> {
    let fields = match level {
        AdminLevel::District => vec![point.district.as_deref()],
        AdminLevel::Province => vec![point.province.as_deref(), point.region.as_deref()],
        AdminLevel::Area => vec![
            point.area.as_deref(),
            point.region.as_deref(),
            point.name.as_deref(),
        ],
    };

    fields
        .into_iter()
        .flatten()
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// Resolves a station to a region of `catalog`.
///
/// 1. The first candidate that is exactly a region name wins.
/// 2. Otherwise, for each candidate in order, the first region (in
///    catalog order) whose lowercased name contains the lowercased
///    candidate, or is contained by it, wins.
/// 3. Otherwise the station is unmatched.
#[must_use]
pub fn resolve(catalog: &RegionCatalog, point: &PointEntity, level: AdminLevel) -> Resolution {
    let candidates = candidate_names(point, level);

    if let Some(index) = candidates.iter().find_map(|c| catalog.position(c)) {
        return Resolution::Exact(index);
    }

    for candidate in &candidates {
        let target = candidate.to_lowercase();
        let found = catalog
            .lowered_names()
            .position(|key| key.contains(target.as_str()) || target.contains(key));
        if let Some(index) = found {
            return Resolution::Fuzzy(index);
        }
    }

    Resolution::Unmatched
}
