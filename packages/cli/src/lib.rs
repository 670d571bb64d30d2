#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Support code for the `station-density` binary: config loading,
//! station file readers, and choropleth `GeoJSON` rendering.

pub mod config;
pub mod render;
pub mod stations;

use station_density::DensityError;
use station_density_boundary::BoundaryError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON station file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unreadable CSV station file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed config file.
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Boundary file could not be loaded.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    /// Bad level, palette, or provider name.
    #[error(transparent)]
    Density(#[from] DensityError),

    /// Fill opacity outside `[0, 1]`.
    #[error("Invalid opacity {value} (expected a value between 0 and 1)")]
    InvalidOpacity {
        /// The rejected value.
        value: f64,
    },

    /// Station file extension is neither `.json` nor `.csv`.
    #[error("Unsupported station file '{path}' (expected .json or .csv)")]
    UnsupportedStationFormat {
        /// The offending path.
        path: String,
    },
}
