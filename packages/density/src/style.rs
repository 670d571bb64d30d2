//! Per-region polygon styling for map renderers.
//!
//! The renderer owns layers and redraws; this module only decides what
//! each region polygon should look like given its count.

use serde::{Deserialize, Serialize};
use station_density_models::{AdminLevel, Color, MapProvider};

use crate::scale::ColorScale;

/// Fill opacity for regions without stations, so the outline stays
/// visible but the polygon reads as empty.
pub const EMPTY_FILL_OPACITY: f64 = 0.12;

/// Border weight at area level, where polygons are small and dense.
pub const AREA_BORDER_WEIGHT: f64 = 0.5;

/// Border weight at district and province level.
pub const REGION_BORDER_WEIGHT: f64 = 2.0;

/// User-adjustable rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Fill opacity for regions with data, in `[0, 1]`.
    pub opacity: f64,
    /// Whether region outlines are drawn.
    pub show_borders: bool,
    /// Base map under the choropleth.
    pub provider: MapProvider,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            opacity: 0.7,
            show_borders: true,
            provider: MapProvider::default(),
        }
    }
}

/// Resolved style of one region polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStyle {
    /// Polygon fill.
    pub fill_color: Color,
    /// Polygon fill opacity.
    pub fill_opacity: f64,
    /// Outline color.
    pub border_color: Color,
    /// Outline width in pixels.
    pub weight: f64,
    /// Outline opacity.
    pub stroke_opacity: f64,
}

/// Styles a region with `count` stations.
#[must_use]
pub fn region_style(
    count: u64,
    level: AdminLevel,
    options: &StyleOptions,
    scale: &ColorScale,
) -> RegionStyle {
    let weight = match (options.show_borders, level) {
        (false, _) => 0.0,
        (true, AdminLevel::Area) => AREA_BORDER_WEIGHT,
        (true, AdminLevel::District | AdminLevel::Province) => REGION_BORDER_WEIGHT,
    };

    RegionStyle {
        fill_color: scale.color_of(count),
        fill_opacity: if count > 0 {
            options.opacity.clamp(0.0, 1.0)
        } else {
            EMPTY_FILL_OPACITY
        },
        border_color: options.provider.border_color(),
        weight,
        stroke_opacity: if options.show_borders { 1.0 } else { 0.0 },
    }
}
