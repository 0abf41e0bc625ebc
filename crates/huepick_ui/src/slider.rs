//! Hue slider rendering: a rainbow track and a round knob.

use crate::color::{hsv_to_rgb, Rgb, HUE_MAX};
use crate::layout::{PickerLayout, Point, Rectangle};
use crate::surface::Canvas;

/// Knob stroke width relative to its radius.
const KNOB_STROKE_RATIO: f32 = 0.2;

/// Hue stops at every sector boundary, red to red.
pub fn hue_stops() -> [(f32, Rgb); 7] {
    let mut stops = [(0.0, Rgb::BLACK); 7];
    for (k, stop) in stops.iter_mut().enumerate() {
        let position = k as f32 / 6.0;
        *stop = (position, hsv_to_rgb(position, 1.0, 1.0));
    }
    stops
}

/// Draws the hue slider into its own canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRenderer {
    /// Slider canvas width in logical pixels
    width: f32,
    /// Track rectangle, relative to the slider canvas
    track: Rectangle,
    quality: f32,
}

impl SliderRenderer {
    pub fn new(layout: &PickerLayout, quality: f32) -> Self {
        let canvas = layout.slider_canvas();
        let track = layout.slider_track();
        Self {
            width: canvas.width,
            track: Rectangle::new(track.x - canvas.x, 0.0, track.width, track.height),
            quality,
        }
    }

    /// Slider canvas size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        (self.width, self.track.height)
    }

    /// Knob center for a hue, relative to the slider canvas.
    pub fn knob_center(&self, hue: f32) -> Point {
        Point::new(
            self.track.x + hue / HUE_MAX * self.track.width,
            self.track.height / 2.0,
        )
    }

    pub fn paint<C: Canvas>(&self, canvas: &mut C, hue: f32) {
        canvas.save();
        canvas.scale(self.quality, self.quality);
        canvas.clear_rect(Rectangle::new(0.0, 0.0, self.width, self.track.height));

        let mid = self.track.height / 2.0;
        canvas.fill_linear_gradient(
            self.track,
            Point::new(self.track.x, mid),
            Point::new(self.track.x + self.track.width, mid),
            &hue_stops(),
        );

        let radius = self.track.height / 2.0;
        let stroke = radius * KNOB_STROKE_RATIO;
        let center = self.knob_center(hue);
        // Equivalent of hsl(hue, 100%, 50%)
        canvas.fill_circle(center, radius - stroke, hsv_to_rgb(hue / HUE_MAX, 1.0, 1.0));
        canvas.stroke_circle(center, radius - stroke, Rgb::WHITE, stroke);

        canvas.restore();
    }
}
