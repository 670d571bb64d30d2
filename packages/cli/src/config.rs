//! TOML configuration for the `station-density` binary.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. Command-line flags are layered on top with
//! [`DensityConfig::apply`].

use std::path::Path;

use serde::Deserialize;
use station_density::{StyleOptions, parse_admin_level, parse_palette, parse_provider};
use station_density_models::{AdminLevel, MapProvider, Palette};

use crate::CliError;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Admin level to aggregate at.
    pub level: AdminLevel,
    /// Fill palette.
    pub palette: Palette,
    /// Boundary property key overriding the level default.
    pub region_key: Option<String>,
    /// Fill opacity for regions with stations.
    pub opacity: f64,
    /// Whether region outlines are drawn.
    pub show_borders: bool,
    /// Base map the rendered layer is meant for.
    pub provider: MapProvider,
}

impl Default for DensityConfig {
    fn default() -> Self {
        let style = StyleOptions::default();
        Self {
            level: AdminLevel::default(),
            palette: Palette::default(),
            region_key: None,
            opacity: style.opacity,
            show_borders: style.show_borders,
            provider: style.provider,
        }
    }
}

/// Values given on the command line. `None` leaves the config value
/// alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub level: Option<String>,
    pub palette: Option<String>,
    pub region_key: Option<String>,
    pub opacity: Option<f64>,
    pub hide_borders: bool,
    pub provider: Option<String>,
}

impl DensityConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Toml`] if the text is not valid TOML or names
    /// an unknown level, palette, or provider, and
    /// [`CliError::InvalidOpacity`] if `opacity` is outside `[0, 1]`.
    pub fn from_toml(toml_str: &str) -> Result<Self, CliError> {
        let config: Self = toml::de::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if (0.0..=1.0).contains(&self.opacity) {
            Ok(())
        } else {
            Err(CliError::InvalidOpacity {
                value: self.opacity,
            })
        }
    }

    /// Loads a config file, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let config = Self::from_toml(&std::fs::read_to_string(path)?)?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Applies command-line overrides.
    ///
    /// An overridden level without an explicit region key drops any key
    /// from the config file, matching what the controller does on a
    /// level change.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Density`] for unknown level, palette, or
    /// provider names and [`CliError::InvalidOpacity`] for an opacity
    /// outside `[0, 1]`.
    pub fn apply(&mut self, overrides: &Overrides) -> Result<(), CliError> {
        if let Some(level) = &overrides.level {
            let level = parse_admin_level(level)?;
            if level != self.level {
                self.level = level;
                self.region_key = None;
            }
        }
        if let Some(palette) = &overrides.palette {
            self.palette = parse_palette(palette)?;
        }
        if let Some(region_key) = &overrides.region_key {
            self.region_key = Some(region_key.clone());
        }
        if let Some(opacity) = overrides.opacity {
            self.opacity = opacity;
        }
        if overrides.hide_borders {
            self.show_borders = false;
        }
        if let Some(provider) = &overrides.provider {
            self.provider = parse_provider(provider)?;
        }
        self.validate()
    }

    /// Rendering options derived from this config.
    #[must_use]
    pub const fn style_options(&self) -> StyleOptions {
        StyleOptions {
            opacity: self.opacity,
            show_borders: self.show_borders,
            provider: self.provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use station_density::DensityError;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = DensityConfig::from_toml("").unwrap();
        assert_eq!(config, DensityConfig::default());
        assert_eq!(config.level, AdminLevel::Province);
        assert_eq!(config.palette, Palette::YlOrRd);
        assert_eq!(config.provider, MapProvider::CartodbDark);
        assert!(config.show_borders);
    }

    #[test]
    fn parses_full_config() {
        let config = DensityConfig::from_toml(
            r#"
level = "district"
palette = "Viridis"
region_key = "shapeName"
opacity = 0.5
show_borders = false
provider = "openstreetmap"
"#,
        )
        .unwrap();
        assert_eq!(config.level, AdminLevel::District);
        assert_eq!(config.palette, Palette::Viridis);
        assert_eq!(config.region_key.as_deref(), Some("shapeName"));
        assert!((config.opacity - 0.5).abs() < f64::EPSILON);
        assert!(!config.show_borders);
        assert_eq!(config.provider, MapProvider::OpenStreetMap);
    }

    #[test]
    fn unknown_palette_in_file_is_an_error() {
        assert!(matches!(
            DensityConfig::from_toml("palette = \"Magma\""),
            Err(CliError::Toml(_))
        ));
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = DensityConfig::from_toml("palette = \"Plasma\"\nopacity = 0.4").unwrap();
        config
            .apply(&Overrides {
                palette: Some("Turbo".to_string()),
                hide_borders: true,
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.palette, Palette::Turbo);
        assert!((config.opacity - 0.4).abs() < f64::EPSILON);
        assert!(!config.style_options().show_borders);
    }

    #[test]
    fn level_override_drops_file_region_key() {
        let mut config =
            DensityConfig::from_toml("level = \"province\"\nregion_key = \"shapeName\"").unwrap();
        config
            .apply(&Overrides {
                level: Some("area".to_string()),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.level, AdminLevel::Area);
        assert_eq!(config.region_key, None);
    }

    #[test]
    fn explicit_key_survives_level_override() {
        let mut config = DensityConfig::default();
        config
            .apply(&Overrides {
                level: Some("district".to_string()),
                region_key: Some("NAME_2".to_string()),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.region_key.as_deref(), Some("NAME_2"));
    }

    #[test]
    fn unknown_flag_values_are_rejected() {
        let mut config = DensityConfig::default();
        assert!(matches!(
            config.apply(&Overrides {
                palette: Some("Magma".to_string()),
                ..Overrides::default()
            }),
            Err(CliError::Density(DensityError::UnknownPalette { .. }))
        ));
    }

    #[test]
    fn opacity_outside_unit_range_is_rejected() {
        assert!(matches!(
            DensityConfig::from_toml("opacity = 1.5"),
            Err(CliError::InvalidOpacity { .. })
        ));

        let mut config = DensityConfig::default();
        for opacity in [-0.1, 2.0, f64::NAN] {
            assert!(matches!(
                config.apply(&Overrides {
                    opacity: Some(opacity),
                    ..Overrides::default()
                }),
                Err(CliError::InvalidOpacity { .. })
            ));
        }

        config
            .apply(&Overrides {
                opacity: Some(1.0),
                ..Overrides::default()
            })
            .unwrap();
        assert!((config.style_options().opacity - 1.0).abs() < f64::EPSILON);
    }
}
