//! Headless demo run: build a picker, replay gestures, export the canvases.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use huepick_ui::{
    format_color, ColorPicker, HeadlessSurface, Phase, Point, RasterBackend, RasterColorPicker,
    Rgb,
};

use crate::config::{DemoConfig, Gesture};
use crate::error::DemoError;
use crate::export::save_png;

/// File name of the exported palette canvas.
pub const PALETTE_FILE: &str = "palette.png";
/// File name of the exported hue slider canvas.
pub const SLIDER_FILE: &str = "slider.png";

/// What a demo run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Color after the last gesture
    pub final_color: Rgb,
    /// Every color observers were told about, in order
    pub history: Vec<Rgb>,
    /// Files written
    pub files: Vec<PathBuf>,
}

/// Deliver one pointer event at a viewport point.
fn send(picker: &mut RasterColorPicker, phase: Phase, at: [f32; 2]) {
    match picker.pointer_event_at(phase, Point::new(at[0], at[1])) {
        Some((target, event)) => picker.dispatch(target, &event),
        None => log::warn!("Dropping {:?} at {:?}: picker not attached", phase, at),
    }
}

/// Replay a press, the moves of its path and a release.
pub fn play(picker: &mut RasterColorPicker, gesture: &Gesture) {
    log::debug!("Gesture {:?} -> {:?}", gesture.from, gesture.to);
    send(picker, Phase::Press, gesture.from);
    for point in gesture.path() {
        send(picker, Phase::Move, point);
    }
    send(picker, Phase::Release, gesture.to);
}

/// Run the demo described by `config`.
pub fn run(config: &DemoConfig) -> Result<DemoReport, DemoError> {
    let mut backend = RasterBackend::new();
    let mut picker = RasterColorPicker::new(config.picker.clone(), &mut backend)?;

    let history = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&history);
    picker.on_color_changed(Box::new(move |rgb| {
        log::info!("Color changed: {}", format_color(rgb));
        sink.borrow_mut().push(rgb);
    }));

    picker.attach(HeadlessSurface::default())?;

    if let Some(rgb) = config.initial_color {
        picker.change_color(rgb, true);
        log::info!("Initial color: {}", format_color(rgb));
    }

    for gesture in &config.gestures {
        play(&mut picker, gesture);
    }

    std::fs::create_dir_all(&config.output_dir)?;
    let palette_path = config.output_dir.join(PALETTE_FILE);
    let slider_path = config.output_dir.join(SLIDER_FILE);
    save_png(picker.canvas(), &palette_path)?;
    save_png(picker.slider_canvas(), &slider_path)?;

    let final_color = picker.rgb();
    picker.detach();

    let history = history.borrow().clone();
    log::info!(
        "Final color {} after {} notifications",
        format_color(final_color),
        history.len()
    );

    Ok(DemoReport {
        final_color,
        history,
        files: vec![palette_path, slider_path],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_ui::{hsv_to_rgb, PickerConfig, PickerStyle};

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("huepick-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_default_run_ends_at_cyan_side() {
        let config = DemoConfig {
            output_dir: temp_dir("default"),
            ..DemoConfig::default()
        };
        let report = run(&config).unwrap();

        // palette drag: s = 50 + 25, v = 50 + 25; knob drag: hue 180
        assert_eq!(report.final_color, hsv_to_rgb(0.5, 0.75, 0.75));
        assert_eq!(report.history.last(), Some(&report.final_color));
        // press plus every move, for both gestures
        assert_eq!(report.history.len(), 2 * 9);
        for file in &report.files {
            assert!(file.exists());
        }

        let _ = std::fs::remove_dir_all(&config.output_dir);
    }

    #[test]
    fn test_exported_png_matches_quality() {
        let style = PickerStyle::new().palette_width(100.0).palette_height(100.0);
        let config = DemoConfig {
            picker: PickerConfig::new(style).quality(2.0),
            gestures: Vec::new(),
            output_dir: temp_dir("quality"),
            ..DemoConfig::default()
        };
        let report = run(&config).unwrap();
        assert!(report.history.is_empty());

        let palette = image::open(&report.files[0]).unwrap();
        assert_eq!((palette.width(), palette.height()), (240, 240));
        let slider = image::open(&report.files[1]).unwrap();
        assert_eq!((slider.width(), slider.height()), (240, 40));

        let _ = std::fs::remove_dir_all(&config.output_dir);
    }

    #[test]
    fn test_initial_color_is_silent() {
        let config = DemoConfig {
            initial_color: Some(Rgb::new(0, 0, 255)),
            gestures: Vec::new(),
            output_dir: temp_dir("initial"),
            ..DemoConfig::default()
        };
        let report = run(&config).unwrap();
        assert_eq!(report.final_color, Rgb::new(0, 0, 255));
        assert!(report.history.is_empty());

        let _ = std::fs::remove_dir_all(&config.output_dir);
    }
}
