//! Count-to-color scale derived from an aggregation.

use station_density_models::{Color, LegendStop, Palette};

use crate::aggregate::Aggregation;
use crate::ramps;

/// Legend sample positions, low to high density.
pub const LEGEND_STOPS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Sequential color scale over `[0, domain_max]`.
///
/// Empty regions always get [`Color::NEUTRAL`]; only positive counts
/// are passed through the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    palette: Palette,
    domain_max: u64,
    neutral_only: bool,
}

impl ColorScale {
    /// Derives the scale from region counts.
    ///
    /// The domain maximum is the largest region count, floored at 1 so
    /// an all-empty aggregation still has a usable domain.
    #[must_use]
    pub fn build(aggregation: &Aggregation, palette: Palette) -> Self {
        Self::with_domain_max(aggregation.max_count(), palette)
    }

    /// Creates a scale with an explicit domain maximum (floored at 1).
    #[must_use]
    pub fn with_domain_max(domain_max: u64, palette: Palette) -> Self {
        Self {
            palette,
            domain_max: domain_max.max(1),
            neutral_only: false,
        }
    }

    /// A scale that colors every count neutral. Used before a boundary
    /// dataset is available.
    #[must_use]
    pub const fn neutral(palette: Palette) -> Self {
        Self {
            palette,
            domain_max: 1,
            neutral_only: true,
        }
    }

    /// Palette the scale samples.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Upper bound of the count domain, at least 1.
    #[must_use]
    pub const fn domain_max(&self) -> u64 {
        self.domain_max
    }

    /// Whether this scale only ever yields the neutral color.
    #[must_use]
    pub const fn is_neutral_only(&self) -> bool {
        self.neutral_only
    }

    /// Palette parameter for a count, `None` for counts that get the
    /// neutral color.
    #[must_use]
    pub fn parameter(&self, count: u64) -> Option<f64> {
        if count == 0 || self.neutral_only {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let t = count as f64 / self.domain_max as f64;
        Some(t)
    }

    /// Fill color for a region with `count` stations.
    #[must_use]
    pub fn color_of(&self, count: u64) -> Color {
        self.parameter(count)
            .map_or(Color::NEUTRAL, |t| ramps::interpolate(self.palette, t))
    }

    /// Five-stop left-to-right legend spanning the whole palette,
    /// independent of the actual counts.
    #[must_use]
    pub fn legend_gradient(&self) -> Vec<LegendStop> {
        LEGEND_STOPS
            .iter()
            .map(|&stop| LegendStop {
                stop,
                color: ramps::interpolate(self.palette, stop),
            })
            .collect()
    }

    /// The legend as a CSS `linear-gradient`.
    #[must_use]
    pub fn legend_css(&self) -> String {
        let segments: Vec<String> = self
            .legend_gradient()
            .iter()
            .map(|s| format!("{} {}%", s.color, s.stop * 100.0))
            .collect();
        format!("linear-gradient(to right, {})", segments.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use station_density_models::{AdminLevel, PointEntity};

    use super::*;
    use crate::aggregate::aggregate;
    use crate::catalog::RegionCatalog;

    fn scenario_a() -> Aggregation {
        let catalog = RegionCatalog::from_names(["Colombo", "Gampaha", "Kalutara"]);
        let points = vec![
            PointEntity::new("1", 6.93, 79.86).with_district("Colombo"),
            PointEntity::new("2", 6.91, 79.88).with_district("Colombo"),
            PointEntity::new("3", 7.09, 79.99).with_district("Gampaha"),
        ];
        aggregate(&catalog, &points, AdminLevel::District)
    }

    #[test]
    fn domain_is_max_count() {
        let scale = ColorScale::build(&scenario_a(), Palette::YlOrRd);
        assert_eq!(scale.domain_max(), 2);
    }

    #[test]
    fn domain_floor_is_one() {
        let catalog = RegionCatalog::from_names(["Colombo", "Gampaha"]);
        let empty = aggregate(&catalog, &[], AdminLevel::District);
        assert_eq!(ColorScale::build(&empty, Palette::Viridis).domain_max(), 1);
        assert_eq!(
            ColorScale::build(&Aggregation::default(), Palette::Viridis).domain_max(),
            1
        );
    }

    #[test]
    fn empty_region_is_neutral() {
        let agg = scenario_a();
        for palette in Palette::all() {
            let scale = ColorScale::build(&agg, *palette);
            assert_eq!(scale.color_of(agg.count_of("Kalutara")), Color::NEUTRAL);
        }
    }

    #[test]
    fn max_count_maps_to_palette_top() {
        let scale = ColorScale::build(&scenario_a(), Palette::Viridis);
        assert_eq!(scale.color_of(2), ramps::interpolate(Palette::Viridis, 1.0));
        assert_eq!(scale.color_of(1), ramps::interpolate(Palette::Viridis, 0.5));
    }

    #[test]
    fn parameter_is_strictly_monotonic() {
        let scale = ColorScale::with_domain_max(50, Palette::Turbo);
        let mut last = 0.0;
        for count in 1..=50 {
            let t = scale.parameter(count).unwrap();
            assert!(t > last);
            last = t;
        }
        assert!((last - 1.0).abs() < f64::EPSILON);
        assert_eq!(scale.parameter(0), None);
    }

    #[test]
    fn neutral_scale_never_uses_palette() {
        let scale = ColorScale::neutral(Palette::Plasma);
        assert!(scale.is_neutral_only());
        assert_eq!(scale.color_of(0), Color::NEUTRAL);
        assert_eq!(scale.color_of(10), Color::NEUTRAL);
    }

    #[test]
    fn legend_has_five_ordered_stops() {
        let scale = ColorScale::with_domain_max(7, Palette::YlOrRd);
        let legend = scale.legend_gradient();
        let stops: Vec<f64> = legend.iter().map(|s| s.stop).collect();
        assert_eq!(stops, LEGEND_STOPS.to_vec());
        assert_eq!(legend[0].color.to_hex(), "#ffffcc");
        assert_eq!(legend[4].color.to_hex(), "#800026");
    }

    #[test]
    fn legend_ignores_counts() {
        let small = ColorScale::with_domain_max(1, Palette::Cividis);
        let large = ColorScale::with_domain_max(900, Palette::Cividis);
        assert_eq!(small.legend_gradient(), large.legend_gradient());
    }

    #[test]
    fn legend_css_format() {
        let css = ColorScale::with_domain_max(3, Palette::Viridis).legend_css();
        assert!(css.starts_with("linear-gradient(to right, rgb(68, 1, 84) 0%, "));
        assert!(css.contains(" 25%, "));
        assert!(css.ends_with("rgb(253, 231, 37) 100%)"));
    }
}
