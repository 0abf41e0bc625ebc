//! Contract between the picker and its host.
//!
//! The picker never creates windows or elements itself. A [`Backend`] hands
//! out drawing canvases at construction time, and a [`Surface`] is the
//! container the picker mounts into while attached.

use crate::color::Rgb;
use crate::error::Result;
use crate::layout::{Point, Rectangle, VisualTree};

/// A 2D drawing canvas with a backing store in device pixels.
///
/// Drawing calls take logical coordinates and go through the current
/// transform, which starts as identity after every [`Canvas::resize`].
pub trait Canvas {
    /// Reallocate the backing store. Clears content and transform.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Backing store size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Canvas::save`].
    fn restore(&mut self);

    /// Scale subsequent drawing.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Make a region fully transparent.
    fn clear_rect(&mut self, rect: Rectangle);

    fn fill_rect(&mut self, rect: Rectangle, color: Rgb);

    /// Fill `rect` with a linear gradient running from `start` to `end`.
    /// Stops are `(position in [0, 1], color)` pairs.
    fn fill_linear_gradient(
        &mut self,
        rect: Rectangle,
        start: Point,
        end: Point,
        stops: &[(f32, Rgb)],
    );

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb);

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgb, width: f32);

    /// Draw another canvas of the same kind, stretched into `dest`.
    fn draw_canvas(&mut self, source: &Self, dest: Rectangle);
}

/// Provides canvases and host capabilities.
pub trait Backend {
    type Canvas: Canvas;

    /// Allocate a canvas. Failing here is fatal for picker construction.
    fn create_canvas(&mut self) -> Result<Self::Canvas>;

    /// Device pixels per logical pixel.
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    /// Whether the host delivers touch rather than mouse events.
    fn supports_touch(&self) -> bool {
        false
    }
}

/// The container a picker is mounted into.
pub trait Surface {
    /// Insert the picker's visual tree.
    fn mount(&mut self, tree: &VisualTree) -> Result<()>;

    /// Remove the visual tree again.
    fn unmount(&mut self);

    /// Viewport position of the mounted tree's top-left corner.
    ///
    /// Queried on every event, so hosts that scroll or move the picker can
    /// report the current value.
    fn origin(&self) -> Point;
}
