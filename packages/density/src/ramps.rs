//! Sequential color ramps for the choropleth palettes.
//!
//! Viridis, Plasma and Cividis are control-point tables sampled from the
//! matplotlib originals and interpolated linearly in sRGB. `YlOrRd` is
//! the 9-class `ColorBrewer` scheme smoothed with a uniform B-spline, and
//! Turbo uses its published polynomial fit. Every ramp accepts any `t`
//! and clamps it to `[0, 1]`.

use station_density_models::{Color, Palette};

/// A continuous ramp over evenly spaced sRGB control points.
pub struct ColorRamp {
    points: &'static [[u8; 3]],
}

impl ColorRamp {
    /// Linear interpolation between the two control points around `t`.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn linear(&self, t: f64) -> Color {
        let n = self.points.len();
        match n {
            0 => return Color::rgb(0, 0, 0),
            1 => return to_color(self.points[0].map(f64::from)),
            _ => {}
        }

        let t = clamp_unit(t);
        #[allow(clippy::cast_precision_loss)]
        let scaled = t * (n - 1) as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lo = (scaled.floor() as usize).min(n - 2);
        #[allow(clippy::cast_precision_loss)]
        let frac = scaled - lo as f64;
        let a = self.points[lo];
        let b = self.points[lo + 1];

        to_color(std::array::from_fn(|c| {
            f64::from(a[c]) + (f64::from(b[c]) - f64::from(a[c])) * frac
        }))
    }

    /// Uniform cubic B-spline through the control points, with the
    /// end segments extrapolated so the curve starts and ends exactly
    /// on the first and last point.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn basis(&self, t: f64) -> Color {
        let n = self.points.len();
        if n < 2 {
            return self.linear(t);
        }

        let segments = n - 1;
        let t = clamp_unit(t);
        #[allow(clippy::cast_precision_loss)]
        let scaled = t * segments as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = (scaled.floor() as usize).min(segments - 1);
        #[allow(clippy::cast_precision_loss)]
        let local = scaled - i as f64;

        to_color(std::array::from_fn(|c| {
            let v1 = f64::from(self.points[i][c]);
            let v2 = f64::from(self.points[i + 1][c]);
            let v0 = if i > 0 {
                f64::from(self.points[i - 1][c])
            } else {
                2.0 * v1 - v2
            };
            let v3 = if i < segments - 1 {
                f64::from(self.points[i + 2][c])
            } else {
                2.0 * v2 - v1
            };
            basis_point(local, v0, v1, v2, v3)
        }))
    }
}

/// Evaluates one channel of a uniform cubic B-spline segment.
#[allow(clippy::suboptimal_flops)]
fn basis_point(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn to_color(rgb: [f64; 3]) -> Color {
    Color::rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

/// `ColorBrewer` `YlOrRd`, 9 classes.
pub static YL_OR_RD: ColorRamp = ColorRamp {
    points: &[
        [0xff, 0xff, 0xcc],
        [0xff, 0xed, 0xa0],
        [0xfe, 0xd9, 0x76],
        [0xfe, 0xb2, 0x4c],
        [0xfd, 0x8d, 0x3c],
        [0xfc, 0x4e, 0x2a],
        [0xe3, 0x1a, 0x1c],
        [0xbd, 0x00, 0x26],
        [0x80, 0x00, 0x26],
    ],
};

/// Viridis at t = 0.0, 0.1, ..., 1.0.
pub static VIRIDIS: ColorRamp = ColorRamp {
    points: &[
        [0x44, 0x01, 0x54], // dark purple
        [0x48, 0x24, 0x75],
        [0x41, 0x44, 0x87],
        [0x35, 0x5f, 0x8d],
        [0x2a, 0x78, 0x8e],
        [0x21, 0x91, 0x8c], // teal
        [0x22, 0xa8, 0x84],
        [0x44, 0xbf, 0x70],
        [0x7a, 0xd1, 0x51],
        [0xbd, 0xdf, 0x26],
        [0xfd, 0xe7, 0x25], // bright yellow
    ],
};

/// Plasma at t = 0.0, 0.1, ..., 1.0.
pub static PLASMA: ColorRamp = ColorRamp {
    points: &[
        [0x0d, 0x08, 0x87], // deep blue
        [0x41, 0x04, 0x9d],
        [0x6a, 0x00, 0xa8],
        [0x8f, 0x0d, 0xa4],
        [0xb1, 0x2a, 0x90],
        [0xcc, 0x47, 0x78], // magenta
        [0xe1, 0x64, 0x62],
        [0xf2, 0x84, 0x4b],
        [0xfc, 0xa6, 0x36],
        [0xfc, 0xce, 0x25],
        [0xf0, 0xf9, 0x21], // yellow
    ],
};

/// Cividis, navy through gray to yellow; avoids red-green contrast.
pub static CIVIDIS: ColorRamp = ColorRamp {
    points: &[
        [0x00, 0x22, 0x4e], // dark navy
        [0x12, 0x35, 0x70],
        [0x3b, 0x49, 0x6c],
        [0x57, 0x5d, 0x6d],
        [0x70, 0x71, 0x73],
        [0x8a, 0x86, 0x78], // neutral gray
        [0xa5, 0x9c, 0x74],
        [0xc3, 0xb3, 0x69],
        [0xe1, 0xcc, 0x55],
        [0xfe, 0xe8, 0x38], // warm yellow
    ],
};

/// Turbo via its degree-5 polynomial approximation.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn turbo(t: f64) -> Color {
    let t = clamp_unit(t);
    let r = 34.61 + t * (1172.33 - t * (10793.56 - t * (33300.12 - t * (38394.49 - t * 14825.05))));
    let g = 23.31 + t * (557.33 + t * (1225.33 - t * (3574.96 - t * (1073.77 + t * 707.56))));
    let b = 27.2 + t * (3211.1 - t * (15327.97 - t * (27814.0 - t * (22569.18 - t * 6838.66))));
    to_color([r, g, b])
}

/// Evaluates `palette` at `t` (clamped to `[0, 1]`).
#[must_use]
pub fn interpolate(palette: Palette, t: f64) -> Color {
    match palette {
        Palette::YlOrRd => YL_OR_RD.basis(t),
        Palette::Viridis => VIRIDIS.linear(t),
        Palette::Plasma => PLASMA.linear(t),
        Palette::Turbo => turbo(t),
        Palette::Cividis => CIVIDIS.linear(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_hit_their_endpoints() {
        assert_eq!(interpolate(Palette::YlOrRd, 0.0).to_hex(), "#ffffcc");
        assert_eq!(interpolate(Palette::YlOrRd, 1.0).to_hex(), "#800026");
        assert_eq!(interpolate(Palette::Viridis, 0.0).to_hex(), "#440154");
        assert_eq!(interpolate(Palette::Viridis, 1.0).to_hex(), "#fde725");
        assert_eq!(interpolate(Palette::Plasma, 0.0).to_hex(), "#0d0887");
        assert_eq!(interpolate(Palette::Plasma, 1.0).to_hex(), "#f0f921");
        assert_eq!(interpolate(Palette::Cividis, 0.0).to_hex(), "#00224e");
        assert_eq!(interpolate(Palette::Cividis, 1.0).to_hex(), "#fee838");
    }

    #[test]
    fn turbo_endpoints() {
        assert_eq!(turbo(0.0), Color::rgb(35, 23, 27));
        assert_eq!(turbo(1.0), Color::rgb(144, 12, 0));
    }

    #[test]
    fn out_of_range_is_clamped() {
        for palette in Palette::all() {
            assert_eq!(interpolate(*palette, -3.0), interpolate(*palette, 0.0));
            assert_eq!(interpolate(*palette, 7.5), interpolate(*palette, 1.0));
            assert_eq!(interpolate(*palette, f64::NAN), interpolate(*palette, 0.0));
        }
    }

    #[test]
    fn every_palette_is_total_and_opaque() {
        for palette in Palette::all() {
            for step in 0..=100 {
                let color = interpolate(*palette, f64::from(step) / 100.0);
                assert!((color.alpha - 1.0).abs() < f32::EPSILON);
                assert_ne!(color, Color::NEUTRAL);
            }
        }
    }

    #[test]
    fn linear_midpoint_between_stops() {
        let ramp = ColorRamp {
            points: &[[0, 0, 0], [200, 100, 50]],
        };
        assert_eq!(ramp.linear(0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn basis_passes_through_interior_region_smoothly() {
        // Midway through the ramp the spline stays within the hull of the
        // neighboring control points.
        let mid = YL_OR_RD.basis(0.5);
        assert!(mid.r >= 0xfc && mid.r <= 0xfd);
        assert!(mid.g >= 0x4e && mid.g <= 0x8d);
    }

    #[test]
    fn yl_or_rd_darkens_monotonically_in_green() {
        let mut last = u8::MAX;
        for step in 0..=20 {
            let g = interpolate(Palette::YlOrRd, f64::from(step) / 20.0).g;
            assert!(g <= last, "green channel rose at step {step}");
            last = g;
        }
    }
}
