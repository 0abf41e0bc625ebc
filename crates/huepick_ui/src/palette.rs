//! Saturation/value palette rendering.
//!
//! The gradient field only depends on hue, so it is rendered once into an
//! offscreen canvas and blitted on every frame. Only the cursor is drawn
//! per frame.

use crate::color::{hsv_to_rgb, Hsv, Rgb, HUE_MAX, PERCENT_MAX};
use crate::config::ValueScale;
use crate::error::Result;
use crate::layout::{PaletteGeometry, Point, Rectangle};
use crate::surface::Canvas;

/// Cursor stroke width relative to the knob radius.
const CURSOR_STROKE_RATIO: f32 = 0.2;

/// Convert a logical extent to backing-store pixels.
pub(crate) fn device_pixels(logical: f32, quality: f32) -> u32 {
    ((logical * quality).round() as u32).max(1)
}

/// Value (in `[0, 1]` for rows inside the extent) of a palette row.
pub fn row_value(row: u32, geometry: &PaletteGeometry, scale: ValueScale) -> f32 {
    let extent = match scale {
        ValueScale::PaletteWidth => geometry.width,
        ValueScale::PaletteHeight => geometry.height,
    };
    (extent - row as f32) / extent
}

/// Renders the palette bitmap and composites frames.
#[derive(Debug)]
pub struct PaletteRenderer<C> {
    bitmap: C,
    geometry: PaletteGeometry,
    value_scale: ValueScale,
    quality: f32,
    rendered_hue: Option<f32>,
}

impl<C: Canvas> PaletteRenderer<C> {
    /// Take ownership of the offscreen canvas and size it for the palette.
    pub fn new(
        mut bitmap: C,
        geometry: PaletteGeometry,
        value_scale: ValueScale,
        quality: f32,
    ) -> Result<Self> {
        bitmap.resize(
            device_pixels(geometry.width, quality),
            device_pixels(geometry.height, quality),
        )?;
        Ok(Self {
            bitmap,
            geometry,
            value_scale,
            quality,
            rendered_hue: None,
        })
    }

    pub fn bitmap(&self) -> &C {
        &self.bitmap
    }

    /// Hue the cached bitmap was rendered for.
    pub fn rendered_hue(&self) -> Option<f32> {
        self.rendered_hue
    }

    /// Render the gradient field for `hue` (degrees) unless it is cached.
    ///
    /// Returns `true` when the bitmap was regenerated.
    pub fn render_palette(&mut self, hue: f32) -> bool {
        if self.rendered_hue == Some(hue) {
            return false;
        }

        let width = self.geometry.width;
        let h = hue / HUE_MAX;
        let rows = self.geometry.height.max(0.0) as u32;

        self.bitmap.save();
        self.bitmap.scale(self.quality, self.quality);
        for row in 0..=rows {
            let v = row_value(row, &self.geometry, self.value_scale);
            let y = row as f32;
            self.bitmap.fill_linear_gradient(
                Rectangle::new(0.0, y, width, 1.0),
                Point::new(0.0, y),
                Point::new(width, y),
                &[(0.0, hsv_to_rgb(h, 0.0, v)), (1.0, hsv_to_rgb(h, 1.0, v))],
            );
        }
        self.bitmap.restore();

        log::debug!("palette rendered for hue {:.1}", hue);
        self.rendered_hue = Some(hue);
        true
    }

    /// Canvas x of a saturation, in logical pixels.
    pub fn pos_x(&self, saturation: f32) -> f32 {
        saturation * self.geometry.width / PERCENT_MAX + self.geometry.inset
    }

    /// Canvas y of an inverted value (`100 - value`), in logical pixels.
    pub fn pos_y(&self, inverted_value: f32) -> f32 {
        inverted_value * self.geometry.height / PERCENT_MAX + self.geometry.inset
    }

    /// Draw the cursor for the current color.
    pub fn render_cursor(&self, canvas: &mut C, hsv: Hsv) {
        let center = Point::new(
            self.pos_x(hsv.saturation()),
            self.pos_y(PERCENT_MAX - hsv.value()),
        );
        let radius = self.geometry.inset;
        canvas.fill_circle(center, radius, hsv.to_rgb());
        canvas.stroke_circle(center, radius, Rgb::WHITE, radius * CURSOR_STROKE_RATIO);
    }

    /// Clear `canvas`, blit the palette and draw the cursor on top.
    pub fn paint_frame(&self, canvas: &mut C, hsv: Hsv) {
        let inset = self.geometry.inset;
        canvas.save();
        canvas.scale(self.quality, self.quality);
        canvas.clear_rect(Rectangle::new(
            0.0,
            0.0,
            self.geometry.width + inset * 2.0,
            self.geometry.height + inset * 2.0,
        ));
        canvas.draw_canvas(
            &self.bitmap,
            Rectangle::new(inset, inset, self.geometry.width, self.geometry.height),
        );
        self.render_cursor(canvas, hsv);
        canvas.restore();
    }
}
