//! Region-name extraction from boundary feature properties.
//!
//! Boundary files from different sources disagree on which property
//! holds the region name. Resolution tries the caller's preferred key
//! first and then walks a fixed fallback list, so an ADM2 file still
//! yields names when the caller asked for `ADM1_EN`.

use station_density_models::AdminLevel;

use crate::BoundaryFeature;

/// Generic name property tried after all admin-level keys.
pub const FALLBACK_NAME_KEY: &str = "NAME";

/// Returns the ordered property keys tried for `preferred_key`.
///
/// The preferred key comes first, then each admin-level default key
/// (finest level first) that differs from it, then [`FALLBACK_NAME_KEY`].
#[must_use]
pub fn name_key_candidates(preferred_key: &str) -> Vec<&str> {
    let mut keys = vec![preferred_key];
    keys.extend(
        AdminLevel::all()
            .iter()
            .map(|level| level.default_region_key())
            .filter(|key| *key != preferred_key),
    );
    if preferred_key != FALLBACK_NAME_KEY {
        keys.push(FALLBACK_NAME_KEY);
    }
    keys
}

/// Resolves the display name of a boundary feature.
///
/// The first candidate key (see [`name_key_candidates`]) whose value is
/// a string or number that is non-empty after trimming wins. The value
/// is returned as found (untrimmed) so it matches station attributes
/// copied verbatim from the same source.
#[must_use]
pub fn resolve_feature_name(feature: &BoundaryFeature, preferred_key: &str) -> Option<String> {
    name_key_candidates(preferred_key)
        .into_iter()
        .find_map(|key| feature.properties.get(key).and_then(property_text))
}

/// Renders a property value as name text, if it can be one.
fn property_text(value: &serde_json::Value) -> Option<String> {
    let text = match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(props: serde_json::Value) -> BoundaryFeature {
        BoundaryFeature::new(props.as_object().cloned().unwrap())
    }

    #[test]
    fn candidates_for_level_key() {
        assert_eq!(
            name_key_candidates("ADM2_EN"),
            vec!["ADM2_EN", "ADM3_EN", "ADM1_EN", "NAME"]
        );
    }

    #[test]
    fn candidates_for_override_key() {
        assert_eq!(
            name_key_candidates("shapeName"),
            vec!["shapeName", "ADM3_EN", "ADM2_EN", "ADM1_EN", "NAME"]
        );
        assert_eq!(
            name_key_candidates("NAME"),
            vec!["NAME", "ADM3_EN", "ADM2_EN", "ADM1_EN"]
        );
    }

    #[test]
    fn preferred_key_wins() {
        let f = feature(serde_json::json!({ "ADM1_EN": "Western", "ADM2_EN": "Colombo" }));
        assert_eq!(resolve_feature_name(&f, "ADM1_EN").as_deref(), Some("Western"));
        assert_eq!(resolve_feature_name(&f, "ADM2_EN").as_deref(), Some("Colombo"));
    }

    #[test]
    fn falls_back_in_fixed_order() {
        let f = feature(serde_json::json!({
            "ADM1_EN": "Western",
            "ADM3_EN": "Kelaniya",
            "NAME": "ignored"
        }));
        // ADM2_EN is absent, ADM3_EN is tried before ADM1_EN
        assert_eq!(resolve_feature_name(&f, "ADM2_EN").as_deref(), Some("Kelaniya"));
    }

    #[test]
    fn skips_blank_and_null_values() {
        let f = feature(serde_json::json!({
            "ADM2_EN": "   ",
            "ADM3_EN": null,
            "ADM1_EN": "",
            "NAME": "Uva"
        }));
        assert_eq!(resolve_feature_name(&f, "ADM2_EN").as_deref(), Some("Uva"));
    }

    #[test]
    fn numbers_are_names() {
        let f = feature(serde_json::json!({ "district_code": 11 }));
        assert_eq!(resolve_feature_name(&f, "district_code").as_deref(), Some("11"));
    }

    #[test]
    fn booleans_and_objects_are_not_names() {
        let f = feature(serde_json::json!({ "ADM2_EN": true, "NAME": { "en": "x" } }));
        assert_eq!(resolve_feature_name(&f, "ADM2_EN"), None);
    }

    #[test]
    fn value_is_not_trimmed() {
        let f = feature(serde_json::json!({ "ADM2_EN": " Colombo " }));
        assert_eq!(resolve_feature_name(&f, "ADM2_EN").as_deref(), Some(" Colombo "));
    }
}
