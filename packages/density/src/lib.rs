#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Station density aggregation over administrative regions.
//!
//! Resolves each station to a region of a boundary dataset by name (not
//! by geometry), counts stations per region, and maps counts onto a
//! sequential color palette for choropleth rendering.
//!
//! The pipeline is a pure function of five inputs (stations, boundary
//! dataset, admin level, region-key override, palette); see
//! [`controller::compute`]. Every call rebuilds the catalog, the
//! aggregates, and the scale from scratch.

pub mod aggregate;
pub mod catalog;
pub mod controller;
pub mod ramps;
pub mod resolve;
pub mod scale;
pub mod stats;
pub mod style;

use std::str::FromStr as _;

use station_density_models::{AdminLevel, MapProvider, Palette};
use thiserror::Error;

pub use aggregate::{Aggregation, aggregate};
pub use catalog::RegionCatalog;
pub use controller::{
    DensityController, DensityInputs, DensityState, DensityView, LoadTicket, compute,
};
pub use resolve::{Resolution, candidate_names, resolve};
pub use scale::ColorScale;
pub use stats::summarize;
pub use style::{RegionStyle, StyleOptions, region_style};

/// Errors raised when turning user-facing identifiers into engine
/// inputs.
#[derive(Debug, Error)]
pub enum DensityError {
    /// Palette name is not one of the supported palettes.
    #[error("Unknown palette '{name}' (expected one of YlOrRd, Viridis, Plasma, Turbo, Cividis)")]
    UnknownPalette {
        /// The name that failed to parse.
        name: String,
    },

    /// Admin level name is not `area`, `district`, or `province`.
    #[error("Unknown admin level '{name}' (expected area, district, or province)")]
    UnknownAdminLevel {
        /// The name that failed to parse.
        name: String,
    },

    /// Map provider name is not a known base map.
    #[error("Unknown map provider '{name}' (expected openstreetmap, cartodb_dark, cartodb_light, or satellite)")]
    UnknownProvider {
        /// The name that failed to parse.
        name: String,
    },
}

/// Parses a palette name.
///
/// Names are matched exactly. An unknown name is an error rather than a
/// silent fallback to the default palette.
///
/// # Errors
///
/// Returns [`DensityError::UnknownPalette`] if `name` is not a palette.
pub fn parse_palette(name: &str) -> Result<Palette, DensityError> {
    Palette::from_str(name.trim()).map_err(|_| DensityError::UnknownPalette {
        name: name.to_string(),
    })
}

/// Parses an admin level name, case-insensitively.
///
/// # Errors
///
/// Returns [`DensityError::UnknownAdminLevel`] if `name` is not a level.
pub fn parse_admin_level(name: &str) -> Result<AdminLevel, DensityError> {
    AdminLevel::from_str(name.trim()).map_err(|_| DensityError::UnknownAdminLevel {
        name: name.to_string(),
    })
}

/// Parses a map provider name, case-insensitively.
///
/// # Errors
///
/// Returns [`DensityError::UnknownProvider`] if `name` is not a provider.
pub fn parse_provider(name: &str) -> Result<MapProvider, DensityError> {
    MapProvider::from_str(name.trim()).map_err(|_| DensityError::UnknownProvider {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_palette() {
        for palette in Palette::all() {
            assert_eq!(parse_palette(palette.as_ref()).unwrap(), *palette);
        }
    }

    #[test]
    fn unknown_palette_fails_fast() {
        let err = parse_palette("Magma").unwrap_err();
        assert!(matches!(err, DensityError::UnknownPalette { ref name } if name == "Magma"));
        assert!(err.to_string().contains("Magma"));
    }

    #[test]
    fn palette_names_are_case_sensitive() {
        assert!(parse_palette("viridis").is_err());
    }

    #[test]
    fn parses_admin_levels() {
        assert_eq!(parse_admin_level(" District ").unwrap(), AdminLevel::District);
        assert!(matches!(
            parse_admin_level("county"),
            Err(DensityError::UnknownAdminLevel { .. })
        ));
    }

    #[test]
    fn parses_providers() {
        assert_eq!(parse_provider("OpenStreetMap").unwrap(), MapProvider::OpenStreetMap);
        assert_eq!(parse_provider("cartodb_light").unwrap(), MapProvider::CartodbLight);
        assert!(matches!(
            parse_provider("mapbox"),
            Err(DensityError::UnknownProvider { .. })
        ));
    }
}
