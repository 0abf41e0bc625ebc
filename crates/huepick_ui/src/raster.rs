//! Software raster backend built on `tiny-skia`.
//!
//! [`RasterCanvas`] implements [`Canvas`] on a `tiny_skia::Pixmap`.
//! [`RasterBackend`] and [`HeadlessSurface`] complete the host side for
//! tests, demos and anything else that wants pixels without a window.

use crate::color::Rgb;
use crate::error::{PickerError, Result};
use crate::layout::{Point, Rectangle, VisualTree};
use crate::surface::{Backend, Canvas, Surface};
use tiny_skia as skia;

fn skia_color(rgb: Rgb) -> skia::Color {
    skia::Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
}

fn solid_paint(rgb: Rgb, anti_alias: bool) -> skia::Paint<'static> {
    let mut paint = skia::Paint::default();
    paint.set_color_rgba8(rgb.r, rgb.g, rgb.b, 255);
    paint.anti_alias = anti_alias;
    paint
}

fn skia_rect(rect: Rectangle) -> Option<skia::Rect> {
    skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn allocate(width: u32, height: u32) -> Result<skia::Pixmap> {
    skia::Pixmap::new(width, height).ok_or_else(|| {
        PickerError::CanvasUnavailable(format!("cannot allocate a {}x{} pixmap", width, height))
    })
}

/// A canvas backed by a `tiny-skia` pixmap.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    pixmap: skia::Pixmap,
    transform: skia::Transform,
    stack: Vec<skia::Transform>,
}

impl RasterCanvas {
    /// Create a canvas. Zero-sized canvases are not supported.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            pixmap: allocate(width, height)?,
            transform: skia::Transform::identity(),
            stack: Vec::new(),
        })
    }

    pub fn pixmap(&self) -> &skia::Pixmap {
        &self.pixmap
    }

    /// Demultiplied RGBA of a device pixel.
    pub fn pixel_rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Color of a device pixel, ignoring alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixel_rgba(x, y).map(|[r, g, b, _]| Rgb::new(r, g, b))
    }

    /// All pixels as demultiplied RGBA bytes, row by row.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect()
    }

    fn fill_path(&mut self, path: &skia::Path, paint: &skia::Paint<'_>) {
        self.pixmap
            .fill_path(path, paint, skia::FillRule::Winding, self.transform, None);
    }
}

impl Canvas for RasterCanvas {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.pixmap = allocate(width, height)?;
        self.transform = skia::Transform::identity();
        self.stack.clear();
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    fn clear_rect(&mut self, rect: Rectangle) {
        let Some(rect) = skia_rect(rect) else {
            return;
        };
        let paint = skia::Paint {
            blend_mode: skia::BlendMode::Clear,
            anti_alias: false,
            ..skia::Paint::default()
        };
        self.pixmap.fill_rect(rect, &paint, self.transform, None);
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Rgb) {
        if let Some(rect) = skia_rect(rect) {
            self.pixmap
                .fill_rect(rect, &solid_paint(color, false), self.transform, None);
        }
    }

    fn fill_linear_gradient(
        &mut self,
        rect: Rectangle,
        start: Point,
        end: Point,
        stops: &[(f32, Rgb)],
    ) {
        let Some(area) = skia_rect(rect) else {
            return;
        };
        let gradient_stops = stops
            .iter()
            .map(|(position, color)| skia::GradientStop::new(*position, skia_color(*color)))
            .collect();
        let shader = skia::LinearGradient::new(
            skia::Point::from_xy(start.x, start.y),
            skia::Point::from_xy(end.x, end.y),
            gradient_stops,
            skia::SpreadMode::Pad,
            skia::Transform::identity(),
        );

        match shader {
            Some(shader) => {
                let paint = skia::Paint {
                    shader,
                    anti_alias: false,
                    ..skia::Paint::default()
                };
                self.pixmap.fill_rect(area, &paint, self.transform, None);
            }
            // Degenerate gradients (single stop, zero length) fall back to
            // the first stop's color
            None => {
                if let Some((_, color)) = stops.first() {
                    self.fill_rect(rect, *color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        if let Some(path) = skia::PathBuilder::from_circle(center.x, center.y, radius) {
            self.fill_path(&path, &solid_paint(color, true));
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgb, width: f32) {
        let Some(path) = skia::PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let stroke = skia::Stroke {
            width,
            ..skia::Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &solid_paint(color, true),
            &stroke,
            self.transform,
            None,
        );
    }

    fn draw_canvas(&mut self, source: &Self, dest: Rectangle) {
        let (width, height) = source.size();
        let transform = self
            .transform
            .pre_translate(dest.x, dest.y)
            .pre_scale(dest.width / width as f32, dest.height / height as f32);
        self.pixmap.draw_pixmap(
            0,
            0,
            source.pixmap.as_ref(),
            &skia::PixmapPaint::default(),
            transform,
            None,
        );
    }
}

/// Hands out [`RasterCanvas`]es.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterBackend {
    pub device_pixel_ratio: f32,
    pub touch: bool,
}

impl RasterBackend {
    pub fn new() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            touch: false,
        }
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for RasterBackend {
    type Canvas = RasterCanvas;

    fn create_canvas(&mut self) -> Result<RasterCanvas> {
        RasterCanvas::new(1, 1)
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    fn supports_touch(&self) -> bool {
        self.touch
    }
}

/// A surface that only records what was mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    origin: Point,
    mounted: Option<VisualTree>,
    mount_count: usize,
}

impl HeadlessSurface {
    /// A surface whose top-left corner sits at `origin` in the viewport.
    pub fn at(origin: Point) -> Self {
        Self {
            origin,
            mounted: None,
            mount_count: 0,
        }
    }

    /// Move the mounted tree, as scrolling would.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn mounted(&self) -> Option<&VisualTree> {
        self.mounted.as_ref()
    }

    /// How many times something was mounted here.
    pub fn mount_count(&self) -> usize {
        self.mount_count
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::at(Point::zero())
    }
}

impl Surface for HeadlessSurface {
    fn mount(&mut self, tree: &VisualTree) -> Result<()> {
        if self.mounted.is_some() {
            return Err(PickerError::Mount("surface already holds a picker".to_string()));
        }
        self.mounted = Some(*tree);
        self.mount_count += 1;
        Ok(())
    }

    fn unmount(&mut self) {
        self.mounted = None;
    }

    fn origin(&self) -> Point {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_canvas_is_unavailable() {
        assert!(matches!(
            RasterCanvas::new(0, 10),
            Err(PickerError::CanvasUnavailable(_))
        ));
        let mut canvas = RasterCanvas::new(1, 1).unwrap();
        assert!(canvas.resize(10, 0).is_err());
    }

    #[test]
    fn test_fill_rect_under_scale() {
        let mut canvas = RasterCanvas::new(20, 20).unwrap();
        canvas.save();
        canvas.scale(2.0, 2.0);
        canvas.fill_rect(Rectangle::new(0.0, 0.0, 5.0, 5.0), Rgb::new(255, 0, 0));
        canvas.restore();

        assert_eq!(canvas.pixel_rgba(9, 9), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel_rgba(10, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_restore_without_save_is_harmless() {
        let mut canvas = RasterCanvas::new(4, 4).unwrap();
        canvas.restore();
        canvas.fill_rect(Rectangle::new(0.0, 0.0, 1.0, 1.0), Rgb::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn test_clear_rect() {
        let mut canvas = RasterCanvas::new(4, 4).unwrap();
        canvas.fill_rect(Rectangle::new(0.0, 0.0, 4.0, 4.0), Rgb::WHITE);
        canvas.clear_rect(Rectangle::new(0.0, 0.0, 2.0, 4.0));
        assert_eq!(canvas.pixel_rgba(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel_rgba(3, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut canvas = RasterCanvas::new(101, 1).unwrap();
        canvas.fill_linear_gradient(
            Rectangle::new(0.0, 0.0, 101.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(101.0, 0.0),
            &[(0.0, Rgb::BLACK), (1.0, Rgb::WHITE)],
        );
        let left = canvas.pixel(0, 0).unwrap();
        let right = canvas.pixel(100, 0).unwrap();
        assert!(left.r < 10);
        assert!(right.r > 245);
    }

    #[test]
    fn test_draw_canvas_stretches_source() {
        let mut source = RasterCanvas::new(2, 2).unwrap();
        source.fill_rect(Rectangle::new(0.0, 0.0, 2.0, 2.0), Rgb::new(0, 0, 255));

        let mut target = RasterCanvas::new(10, 10).unwrap();
        target.draw_canvas(&source, Rectangle::new(2.0, 2.0, 4.0, 4.0));

        assert_eq!(target.pixel(3, 3), Some(Rgb::new(0, 0, 255)));
        assert_eq!(target.pixel_rgba(8, 8), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_circle_fill_and_stroke() {
        let mut canvas = RasterCanvas::new(40, 40).unwrap();
        canvas.fill_circle(Point::new(20.0, 20.0), 10.0, Rgb::new(0, 255, 0));
        canvas.stroke_circle(Point::new(20.0, 20.0), 10.0, Rgb::WHITE, 2.0);

        assert_eq!(canvas.pixel(20, 20), Some(Rgb::new(0, 255, 0)));
        assert_eq!(canvas.pixel(20, 10), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel_rgba(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_headless_surface_rejects_double_mount() {
        let tree = VisualTree {
            size: crate::layout::Size::new(10.0, 10.0),
            palette_canvas: Rectangle::new(0.0, 0.0, 10.0, 5.0),
            slider_canvas: Rectangle::new(0.0, 5.0, 10.0, 5.0),
        };
        let mut surface = HeadlessSurface::default();
        surface.mount(&tree).unwrap();
        assert!(surface.mount(&tree).is_err());
        surface.unmount();
        assert!(surface.mounted().is_none());
        assert_eq!(surface.mount_count(), 1);
    }
}
