//! PNG export of rendered canvases.

use std::path::Path;

use huepick_ui::{Canvas, RasterCanvas};

use crate::error::DemoError;

/// Copy a canvas into an RGBA image buffer.
pub fn to_image(canvas: &RasterCanvas) -> Result<image::RgbaImage, DemoError> {
    let (width, height) = canvas.size();
    image::RgbaImage::from_raw(width, height, canvas.to_rgba8()).ok_or_else(|| {
        DemoError::Export(format!("pixel buffer does not fit {}x{}", width, height))
    })
}

/// Write a canvas to `path` as PNG.
pub fn save_png(canvas: &RasterCanvas, path: &Path) -> Result<(), DemoError> {
    let image = to_image(canvas)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Wrote {}x{} PNG to {:?}", image.width(), image.height(), path);
    Ok(())
}
