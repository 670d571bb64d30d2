//! Base-map providers and the border colors that stay legible on them.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::Color;

/// Base tile layer the choropleth is drawn over.
///
/// The engine never talks to the tile server; it only needs the border
/// and base colors so region outlines contrast with the chosen map.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MapProvider {
    /// Standard OSM raster tiles.
    #[strum(serialize = "openstreetmap")]
    #[serde(rename = "openstreetmap")]
    OpenStreetMap,
    /// Carto dark basemap.
    #[default]
    CartodbDark,
    /// Carto light basemap.
    CartodbLight,
    /// Esri world imagery.
    Satellite,
}

impl MapProvider {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "OpenStreetMap",
            Self::CartodbDark => "Carto Dark",
            Self::CartodbLight => "Carto Light",
            Self::Satellite => "Satellite",
        }
    }

    /// XYZ tile URL template.
    #[must_use]
    pub const fn tile_url(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::CartodbDark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            Self::CartodbLight => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            Self::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }

    /// Attribution text required by the tile provider.
    #[must_use]
    pub const fn attribution(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "© OpenStreetMap contributors",
            Self::CartodbDark | Self::CartodbLight => "© OpenStreetMap contributors © CARTO",
            Self::Satellite => "© Esri",
        }
    }

    /// Region outline color with high contrast on this basemap.
    #[must_use]
    pub const fn border_color(self) -> Color {
        match self {
            // dark gray
            Self::OpenStreetMap => Color::rgb(0x1f, 0x29, 0x37),
            // bright yellow
            Self::CartodbDark => Color::rgb(0xfa, 0xcc, 0x15),
            Self::CartodbLight => Color::rgb(0x11, 0x18, 0x27),
            // electric cyan
            Self::Satellite => Color::rgb(0x00, 0xe5, 0xff),
        }
    }

    /// Background color of an unfilled region on this basemap.
    #[must_use]
    pub const fn region_base_color(self) -> Color {
        match self {
            Self::OpenStreetMap => Color::rgb(0xff, 0xff, 0xff),
            Self::CartodbDark => Color::rgb(0x1e, 0x29, 0x3b),
            Self::CartodbLight => Color::rgb(0xf8, 0xfa, 0xfc),
            Self::Satellite => Color::rgb(0x00, 0x00, 0x00),
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OpenStreetMap,
            Self::CartodbDark,
            Self::CartodbLight,
            Self::Satellite,
        ]
    }
}
