//! Color types and conversions used by the picker.
//!
//! HSV is the picker's source of truth. RGB is always derived from it and
//! never stored on its own, so the two representations cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the hue axis, in degrees.
pub const HUE_MAX: f32 = 360.0;
/// Upper bound of the saturation and value axes, in percent.
pub const PERCENT_MAX: f32 = 100.0;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Format a color as a CSS `rgb(r, g, b)` string.
///
/// Only meant for display; compare [`Rgb`] values directly instead.
pub fn format_color(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Clamp a component into `[0, max]`, mapping NaN to zero.
pub(crate) fn clamp_component(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// A color in hue/saturation/value form.
///
/// Hue is in degrees `[0, 360]`, saturation and value in percent `[0, 100]`.
/// Every constructor and setter clamps, so a `Hsv` is always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    hue: f32,
    saturation: f32,
    value: f32,
}

impl Hsv {
    /// Create a color, clamping each component into its domain.
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: clamp_component(hue, HUE_MAX),
            saturation: clamp_component(saturation, PERCENT_MAX),
            value: clamp_component(value, PERCENT_MAX),
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Copy with a new hue.
    pub fn with_hue(self, hue: f32) -> Self {
        Self::new(hue, self.saturation, self.value)
    }

    /// Copy with new saturation and value.
    pub fn with_saturation_value(self, saturation: f32, value: f32) -> Self {
        Self::new(self.hue, saturation, value)
    }

    /// Convert to RGB.
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(
            self.hue / HUE_MAX,
            self.saturation / PERCENT_MAX,
            self.value / PERCENT_MAX,
        )
    }
}

impl Default for Hsv {
    /// Pure white with the hue parked at red.
    fn default() -> Self {
        Self::new(0.0, 0.0, PERCENT_MAX)
    }
}

fn to_channel(component: f32) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert normalized HSV to RGB.
///
/// `h` is a fraction of a full turn (degrees / 360); `s` and `v` are in
/// `[0, 1]`. The sector index wraps, so `h = 1.0` lands on the same sector
/// as `h = 0.0`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Convert RGB back to HSV.
///
/// Achromatic colors (black, white, grays) have no hue and report 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    Hsv::new(hue, saturation * PERCENT_MAX, max * PERCENT_MAX)
}
