//! Picker configuration.
//!
//! [`PickerStyle`] holds the pixel dimensions; [`PickerConfig`] adds the
//! values normally detected from the host (pixel density and input scheme)
//! so they can be injected instead.

use crate::error::{PickerError, Result};
use crate::pointer::InputScheme;
use serde::{Deserialize, Serialize};

/// How palette rows map onto the value axis.
///
/// The established palette divides the row index by the palette *width*.
/// That only matches the cursor math when width and height are equal, so
/// `PaletteHeight` is offered for non-square palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueScale {
    /// `value = (width - row) / width`
    #[default]
    PaletteWidth,
    /// `value = (height - row) / height`
    PaletteHeight,
}

/// Pixel dimensions of the picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    /// Width of the saturation/value field
    pub palette_width: f32,
    /// Height of the saturation/value field
    pub palette_height: f32,
    /// Radius of the palette cursor
    pub knob_radius: f32,
    /// Space between palette and hue slider
    pub gap: f32,
    /// Height of the hue slider
    pub slider_height: f32,
    /// Row-to-value mapping of the palette bitmap
    pub value_scale: ValueScale,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            palette_width: 500.0,
            palette_height: 500.0,
            knob_radius: 10.0,
            gap: 10.0,
            slider_height: 20.0,
            value_scale: ValueScale::default(),
        }
    }
}

impl PickerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette_width(mut self, width: f32) -> Self {
        self.palette_width = width;
        self
    }

    pub fn palette_height(mut self, height: f32) -> Self {
        self.palette_height = height;
        self
    }

    pub fn knob_radius(mut self, radius: f32) -> Self {
        self.knob_radius = radius;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn slider_height(mut self, height: f32) -> Self {
        self.slider_height = height;
        self
    }

    pub fn value_scale(mut self, scale: ValueScale) -> Self {
        self.value_scale = scale;
        self
    }

    /// Reject dimensions the geometry math cannot work with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("palette_width", self.palette_width),
            ("palette_height", self.palette_height),
            ("slider_height", self.slider_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PickerError::InvalidStyle(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [("knob_radius", self.knob_radius), ("gap", self.gap)];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PickerError::InvalidStyle(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Everything needed to construct a picker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub style: PickerStyle,
    /// Device pixel ratio; the backend's density when unset
    pub quality: Option<f32>,
    /// Event triple; detected from touch capability when unset
    pub input: Option<InputScheme>,
}

impl PickerConfig {
    pub fn new(style: PickerStyle) -> Self {
        Self {
            style,
            quality: None,
            input: None,
        }
    }

    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn input(mut self, scheme: InputScheme) -> Self {
        self.input = Some(scheme);
        self
    }
}
