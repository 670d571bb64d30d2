//! RGB(A) colors as rendered into CSS and GeoJSON style properties.

use serde::{Serialize, Serializer};

/// An sRGB color with straight alpha.
///
/// Opaque colors render as `rgb(r, g, b)`, translucent ones as
/// `rgba(r, g, b, a)`, matching what web map renderers accept as a fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub alpha: f32,
}

impl Color {
    /// Fill for regions without any stations. Never produced by a
    /// palette ramp.
    pub const NEUTRAL: Self = Self {
        r: 156,
        g: 163,
        b: 175,
        alpha: 0.2,
    };

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Renders as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.alpha >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One stop of a left-to-right legend gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendStop {
    /// Position along the gradient in `[0, 1]`.
    pub stop: f64,
    /// Color at that position.
    pub color: Color,
}
