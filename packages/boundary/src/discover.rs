//! Discovery of property keys that look like region names.
//!
//! Boundary files arrive with varying schemas (`ADM2_EN`, `shapeName`,
//! `NAME_1`, ...). The key list produced here backs a "region property"
//! override picker.

use std::sync::LazyLock;

use regex::Regex;
use station_density_models::AdminLevel;

use crate::BoundaryDataset;

/// Matches property keys that plausibly hold a region name: explicit
/// `ADM<n>_..._EN` keys and anything mentioning `NAME` or `ADM`.
static REGION_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^ADM[123].*_EN$|NAME|ADM").expect("valid regex")
});

/// Lists candidate region-name keys for a dataset, de-duplicated, in
/// priority order: the level's default key, the currently selected key,
/// then matching keys of the first feature in key order.
#[must_use]
pub fn discover_region_keys(
    dataset: &BoundaryDataset,
    level: AdminLevel,
    current: Option<&str>,
) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut push = |key: &str| {
        if !key.is_empty() && !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    };

    push(level.default_region_key());
    if let Some(current) = current {
        push(current);
    }

    if let Some(first) = dataset.features().first() {
        for key in first.properties.keys() {
            if REGION_KEY_RE.is_match(key) {
                push(key);
            }
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryFeature;

    fn dataset(props: serde_json::Value) -> BoundaryDataset {
        BoundaryDataset::new(vec![BoundaryFeature::new(
            props.as_object().cloned().unwrap(),
        )])
    }

    #[test]
    fn empty_dataset_lists_default_only() {
        let keys = discover_region_keys(&BoundaryDataset::default(), AdminLevel::District, None);
        assert_eq!(keys, vec!["ADM2_EN"]);
    }

    #[test]
    fn includes_current_and_matching_keys() {
        let ds = dataset(serde_json::json!({
            "ADM1_EN": "Western",
            "ADM1_PCODE": "LK1",
            "Shape_Area": 0.3,
            "shapeName": "Western",
            "NAME": "Western"
        }));
        let keys = discover_region_keys(&ds, AdminLevel::Province, Some("custom_key"));
        assert_eq!(keys[0], "ADM1_EN");
        assert_eq!(keys[1], "custom_key");
        assert!(keys.contains(&"ADM1_PCODE".to_string()));
        assert!(keys.contains(&"shapeName".to_string()));
        assert!(keys.contains(&"NAME".to_string()));
        assert!(!keys.contains(&"Shape_Area".to_string()));
        assert_eq!(keys.iter().filter(|k| *k == "ADM1_EN").count(), 1);
    }

    #[test]
    fn matching_keys_keep_property_order() {
        let ds = BoundaryDataset::parse_lenient(
            r#"{"features": [{"properties": {"shapeName": "Western", "NAME_1": "Western", "ADM1_EN": "Western"}}]}"#,
        );
        let keys = discover_region_keys(&ds, AdminLevel::District, None);
        assert_eq!(keys, vec!["ADM2_EN", "shapeName", "NAME_1", "ADM1_EN"]);
    }

    #[test]
    fn current_equal_to_default_is_not_repeated() {
        let keys = discover_region_keys(&BoundaryDataset::default(), AdminLevel::Area, Some("ADM3_EN"));
        assert_eq!(keys, vec!["ADM3_EN"]);
    }
}
