//! Geometry of the picker: palette canvas, hue track and hue knob.
//!
//! All values are logical pixels relative to the picker's top-left corner.
//! The palette canvas is inset by the knob radius on every side so the
//! cursor can sit on the palette edge without being clipped.

use crate::color::HUE_MAX;
use crate::config::PickerStyle;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same rectangle moved by `offset`.
    pub fn translate(&self, offset: Point) -> Rectangle {
        Rectangle::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// Pointer targets inside a mounted picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The saturation/value canvas
    Palette,
    /// The hue slider track
    SliderTrack,
    /// The knob sitting on the hue track
    SliderKnob,
    /// The host document; drag sessions listen here
    Document,
}

impl Target {
    /// Nodes an event on this target visits while bubbling, innermost first.
    pub fn bubble_path(self) -> &'static [Target] {
        match self {
            Target::Palette => &[Target::Palette, Target::Document],
            Target::SliderTrack => &[Target::SliderTrack, Target::Document],
            Target::SliderKnob => &[Target::SliderKnob, Target::SliderTrack, Target::Document],
            Target::Document => &[Target::Document],
        }
    }
}

/// Dimensions the palette drag math works with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteGeometry {
    pub width: f32,
    pub height: f32,
    /// Distance between the canvas edge and the gradient field
    pub inset: f32,
}

/// What the host mounts: overall size plus the two canvases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTree {
    pub size: Size,
    pub palette_canvas: Rectangle,
    pub slider_canvas: Rectangle,
}

/// Resolved layout of a picker style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    palette_width: f32,
    palette_height: f32,
    knob_radius: f32,
    gap: f32,
    slider_height: f32,
}

impl PickerLayout {
    pub fn new(style: &PickerStyle) -> Self {
        Self {
            palette_width: style.palette_width,
            palette_height: style.palette_height,
            knob_radius: style.knob_radius,
            gap: style.gap,
            slider_height: style.slider_height,
        }
    }

    pub fn palette_geometry(&self) -> PaletteGeometry {
        PaletteGeometry {
            width: self.palette_width,
            height: self.palette_height,
            inset: self.knob_radius,
        }
    }

    /// Pixel width that maps onto the full 360 degrees of hue.
    pub fn hue_scale_width(&self) -> f32 {
        self.palette_width
    }

    pub fn slider_height(&self) -> f32 {
        self.slider_height
    }

    /// Canvas holding the palette and its cursor.
    pub fn palette_canvas(&self) -> Rectangle {
        Rectangle::new(
            0.0,
            0.0,
            self.palette_width + self.knob_radius * 2.0,
            self.palette_height + self.knob_radius * 2.0,
        )
    }

    /// Canvas holding the hue track and knob, below the palette.
    pub fn slider_canvas(&self) -> Rectangle {
        let palette = self.palette_canvas();
        Rectangle::new(
            0.0,
            palette.height + self.gap,
            palette.width,
            self.slider_height,
        )
    }

    /// The part of the slider canvas that maps to hue.
    pub fn slider_track(&self) -> Rectangle {
        let canvas = self.slider_canvas();
        Rectangle::new(
            self.knob_radius,
            canvas.y,
            self.palette_width,
            self.slider_height,
        )
    }

    /// Knob bounds for a hue in degrees.
    pub fn slider_knob(&self, hue: f32) -> Rectangle {
        let track = self.slider_track();
        let center = track.x + hue / HUE_MAX * track.width;
        Rectangle::new(
            center - self.slider_height / 2.0,
            track.y,
            self.slider_height,
            self.slider_height,
        )
    }

    /// Overall picker size.
    pub fn size(&self) -> Size {
        let slider = self.slider_canvas();
        Size::new(slider.width, slider.y + slider.height)
    }

    /// Local bounds of a target. The document covers the whole picker.
    pub fn bounds(&self, target: Target, hue: f32) -> Rectangle {
        match target {
            Target::Palette => self.palette_canvas(),
            Target::SliderTrack => self.slider_track(),
            Target::SliderKnob => self.slider_knob(hue),
            Target::Document => Rectangle::new(0.0, 0.0, self.size().width, self.size().height),
        }
    }

    /// Innermost target under a local point.
    pub fn hit_test(&self, point: Point, hue: f32) -> Target {
        if self.slider_knob(hue).contains(point) {
            Target::SliderKnob
        } else if self.slider_track().contains(point) {
            Target::SliderTrack
        } else if self.palette_canvas().contains(point) {
            Target::Palette
        } else {
            Target::Document
        }
    }

    pub fn visual_tree(&self) -> VisualTree {
        VisualTree {
            size: self.size(),
            palette_canvas: self.palette_canvas(),
            slider_canvas: self.slider_canvas(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PickerLayout {
        PickerLayout::new(&PickerStyle::default())
    }

    #[test]
    fn test_palette_canvas_is_inset_by_knob() {
        let canvas = layout().palette_canvas();
        assert_eq!(canvas, Rectangle::new(0.0, 0.0, 520.0, 520.0));
    }

    #[test]
    fn test_slider_below_palette() {
        let layout = layout();
        assert_eq!(layout.slider_canvas(), Rectangle::new(0.0, 530.0, 520.0, 20.0));
        assert_eq!(layout.slider_track(), Rectangle::new(10.0, 530.0, 500.0, 20.0));
        assert_eq!(layout.size(), Size::new(520.0, 550.0));
    }

    #[test]
    fn test_knob_follows_hue() {
        let layout = layout();
        assert_eq!(layout.slider_knob(0.0).x, 0.0);
        assert_eq!(layout.slider_knob(180.0).x, 250.0);
        assert_eq!(layout.slider_knob(360.0).x, 500.0);
    }

    #[test]
    fn test_hit_test_prefers_knob() {
        let layout = layout();
        assert_eq!(layout.hit_test(Point::new(260.0, 540.0), 180.0), Target::SliderKnob);
        assert_eq!(layout.hit_test(Point::new(100.0, 540.0), 180.0), Target::SliderTrack);
        assert_eq!(layout.hit_test(Point::new(100.0, 100.0), 180.0), Target::Palette);
        assert_eq!(layout.hit_test(Point::new(900.0, 900.0), 180.0), Target::Document);
    }

    #[test]
    fn test_knob_bubbles_through_track() {
        assert_eq!(
            Target::SliderKnob.bubble_path(),
            &[Target::SliderKnob, Target::SliderTrack, Target::Document]
        );
        assert_eq!(Target::Document.bubble_path(), &[Target::Document]);
    }
}
