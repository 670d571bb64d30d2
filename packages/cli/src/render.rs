//! Choropleth `GeoJSON` output.
//!
//! Each named boundary feature is re-emitted with its original
//! properties plus the region name, station count, and `simplestyle`
//! fill/stroke properties, so the file can be dropped straight into a
//! map viewer. The collection carries a `legend` foreign member with the
//! palette gradient.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject};
use serde_json::json;
use station_density::{DensityView, StyleOptions, region_style};
use station_density_boundary::{BoundaryDataset, resolve_feature_name};

/// Builds the styled feature collection for `view`.
///
/// Features without a resolvable name are left out, mirroring the
/// catalog, which skips them too.
#[must_use]
pub fn render_collection(
    dataset: &BoundaryDataset,
    view: &DensityView,
    options: &StyleOptions,
) -> FeatureCollection {
    let features = dataset
        .features()
        .iter()
        .filter_map(|feature| {
            let name = resolve_feature_name(feature, view.region_key())?;
            let count = view.aggregation().count_of(&name);
            let style = region_style(count, view.level(), options, view.scale());

            let mut properties = feature.properties.clone();
            properties.insert("region".to_string(), json!(name));
            properties.insert("count".to_string(), json!(count));
            properties.insert("fill".to_string(), json!(style.fill_color.to_string()));
            properties.insert("fill-opacity".to_string(), json!(style.fill_opacity));
            properties.insert("stroke".to_string(), json!(style.border_color.to_string()));
            properties.insert("stroke-width".to_string(), json!(style.weight));
            properties.insert("stroke-opacity".to_string(), json!(style.stroke_opacity));

            let geometry = feature
                .geometry
                .clone()
                .and_then(|g| serde_json::from_value::<Geometry>(g).ok());

            Some(Feature {
                bbox: None,
                geometry,
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect();

    let scale = view.scale();
    let mut foreign_members = JsonObject::new();
    foreign_members.insert(
        "legend".to_string(),
        json!({
            "palette": scale.palette().to_string(),
            "label": scale.palette().label(),
            "level": view.level().label(),
            "domainMax": scale.domain_max(),
            "stops": scale.legend_gradient(),
            "css": scale.legend_css(),
        }),
    );

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    }
}

/// Renders `view` to a `GeoJSON` string.
#[must_use]
pub fn render_geojson(dataset: &BoundaryDataset, view: &DensityView, options: &StyleOptions) -> String {
    GeoJson::FeatureCollection(render_collection(dataset, view, options)).to_string()
}
