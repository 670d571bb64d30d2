#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative boundary dataset parsing.
//!
//! Reads `GeoJSON` feature collections of admin polygons (ADM1 provinces,
//! ADM2 districts, ADM3 areas) into [`BoundaryDataset`] values. Only the
//! property bag of each feature matters to the density engine; geometry
//! is carried through untouched so renderers can draw it.
//!
//! Parsing is tolerant: a missing or malformed feature list yields an
//! empty dataset rather than an error, so a bad boundary file degrades
//! to "no regions" instead of breaking the map.

pub mod discover;
pub mod names;

use std::path::Path;

use geojson::{GeoJson, JsonObject};
use thiserror::Error;

pub use discover::discover_region_keys;
pub use names::{FALLBACK_NAME_KEY, resolve_feature_name};

/// Errors that can occur while loading a boundary file from disk.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single boundary polygon with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Feature properties (`ADM1_EN`, `ADM2_EN`, `NAME`, ...).
    pub properties: JsonObject,
    /// Raw `GeoJSON` geometry, opaque to the engine.
    pub geometry: Option<serde_json::Value>,
}

impl BoundaryFeature {
    /// Creates a feature with the given properties and no geometry.
    #[must_use]
    pub const fn new(properties: JsonObject) -> Self {
        Self {
            properties,
            geometry: None,
        }
    }
}

/// An ordered collection of boundary features.
///
/// Feature order is preserved from the source file; the region catalog
/// inherits it as its iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryDataset {
    features: Vec<BoundaryFeature>,
}

impl BoundaryDataset {
    /// Creates a dataset from already-parsed features.
    #[must_use]
    pub const fn new(features: Vec<BoundaryFeature>) -> Self {
        Self { features }
    }

    /// Builds a dataset from a feature-collection-shaped JSON value.
    ///
    /// Accepts anything with a `features` array. Features whose
    /// `properties` member is missing or not an object get an empty
    /// property bag (and will never resolve a name). A value without a
    /// `features` array yields an empty dataset.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(features) = value.get("features").and_then(serde_json::Value::as_array) else {
            log::warn!("Boundary dataset has no features array, treating as empty");
            return Self::default();
        };

        let features = features
            .iter()
            .map(|feature| BoundaryFeature {
                properties: feature
                    .get("properties")
                    .and_then(serde_json::Value::as_object)
                    .cloned()
                    .unwrap_or_default(),
                geometry: feature.get("geometry").filter(|g| !g.is_null()).cloned(),
            })
            .collect();

        Self { features }
    }

    /// Builds a dataset from a typed [`GeoJson`] object.
    ///
    /// A `FeatureCollection` contributes all of its features and a lone
    /// `Feature` contributes itself. A bare `Geometry` carries no
    /// properties, so it yields an empty dataset.
    #[must_use]
    pub fn from_geojson(geojson: &GeoJson) -> Self {
        let convert = |feature: &geojson::Feature| BoundaryFeature {
            properties: feature.properties.clone().unwrap_or_default(),
            geometry: feature
                .geometry
                .as_ref()
                .and_then(|g| serde_json::to_value(g).ok()),
        };

        match geojson {
            GeoJson::FeatureCollection(collection) => {
                Self::new(collection.features.iter().map(convert).collect())
            }
            GeoJson::Feature(feature) => Self::new(vec![convert(feature)]),
            GeoJson::Geometry(_) => {
                log::warn!("Boundary dataset is a bare geometry, treating as empty");
                Self::default()
            }
        }
    }

    /// Parses a JSON string, degrading to an empty dataset when the text
    /// is not JSON at all.
    #[must_use]
    pub fn parse_lenient(json: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                log::warn!("Boundary dataset is not valid JSON ({e}), treating as empty");
                Self::default()
            }
        }
    }

    /// Loads a boundary file from disk.
    ///
    /// Unlike [`Self::parse_lenient`], IO and JSON syntax errors are
    /// reported so a CLI user can tell a typo in the path from an empty
    /// file. A well-formed JSON document without features still loads as
    /// an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] if the file cannot be read or is not
    /// valid JSON.
    pub fn load(path: &Path) -> Result<Self, BoundaryError> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let dataset = Self::from_value(&value);
        log::info!(
            "Loaded {} boundary features from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Features in source order.
    #[must_use]
    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the dataset has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_collection_value() {
        let value = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "ADM2_EN": "Colombo" },
                    "geometry": { "type": "Point", "coordinates": [79.86, 6.93] }
                },
                {
                    "type": "Feature",
                    "properties": { "ADM2_EN": "Gampaha" },
                    "geometry": null
                }
            ]
        });
        let dataset = BoundaryDataset::from_value(&value);
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.features()[0].properties.get("ADM2_EN"),
            Some(&serde_json::json!("Colombo"))
        );
        assert!(dataset.features()[0].geometry.is_some());
        assert!(dataset.features()[1].geometry.is_none());
    }

    #[test]
    fn missing_features_yields_empty() {
        let dataset = BoundaryDataset::from_value(&serde_json::json!({ "type": "FeatureCollection" }));
        assert!(dataset.is_empty());

        let dataset = BoundaryDataset::from_value(&serde_json::json!({ "features": "nope" }));
        assert!(dataset.is_empty());

        let dataset = BoundaryDataset::from_value(&serde_json::json!([1, 2, 3]));
        assert!(dataset.is_empty());
    }

    #[test]
    fn feature_without_properties_gets_empty_bag() {
        let dataset = BoundaryDataset::from_value(&serde_json::json!({
            "features": [ { "geometry": null }, { "properties": 42 } ]
        }));
        assert_eq!(dataset.len(), 2);
        assert!(dataset.features().iter().all(|f| f.properties.is_empty()));
    }

    #[test]
    fn lenient_parse_of_garbage_is_empty() {
        assert!(BoundaryDataset::parse_lenient("not json {").is_empty());
        assert!(BoundaryDataset::parse_lenient("null").is_empty());
    }

    #[test]
    fn from_geojson_keeps_order() {
        let geojson: GeoJson = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "NAME": "B" }, "geometry": null },
                { "type": "Feature", "properties": { "NAME": "A" }, "geometry": null }
            ]
        }"#
        .parse()
        .unwrap();
        let dataset = BoundaryDataset::from_geojson(&geojson);
        let names: Vec<_> = dataset
            .features()
            .iter()
            .map(|f| f.properties["NAME"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn from_geojson_bare_geometry_is_empty() {
        let geojson: GeoJson = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#
            .parse()
            .unwrap();
        assert!(BoundaryDataset::from_geojson(&geojson).is_empty());
    }
}
