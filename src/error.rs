//! Error types for the demo.

use thiserror::Error;

/// Errors that can occur while running the demo.
#[derive(Error, Debug)]
pub enum DemoError {
    /// I/O error reading the config or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// The picker could not be built or mounted
    #[error("Picker error: {0}")]
    Picker(#[from] huepick_ui::PickerError),

    /// PNG encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Pixel buffer does not match the canvas size
    #[error("Export error: {0}")]
    Export(String),
}
