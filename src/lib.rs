//! huepick - headless demo for the huepick color picker
//!
//! Builds a picker on the tiny-skia backend, replays scripted pointer
//! gestures through it and writes the rendered canvases as PNG files.

pub mod config;
pub mod demo;
pub mod error;
pub mod export;

pub use config::{DemoConfig, Gesture, LogLevel};
pub use demo::{run, DemoReport};
pub use error::DemoError;
