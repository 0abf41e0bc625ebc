//! Configuration file support for the huepick demo.
//!
//! The demo reads an optional JSON file describing the picker style, the
//! gestures to replay and where to write the rendered canvases. Every field
//! has a default, so `{}` is a valid configuration.

use std::path::PathBuf;

use huepick_ui::{PickerConfig, Rgb};
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Log level setting for the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show drag lifecycle and palette renders
    Debug,
    /// Show every listener change and color update
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// A press, a straight drag in `steps` moves, and a release.
///
/// Coordinates are viewport pixels; the demo mounts the picker at the
/// viewport origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    pub from: [f32; 2],
    pub to: [f32; 2],
    #[serde(default = "default_steps")]
    pub steps: u32,
}

fn default_steps() -> u32 {
    8
}

impl Gesture {
    pub fn new(from: [f32; 2], to: [f32; 2]) -> Self {
        Self {
            from,
            to,
            steps: default_steps(),
        }
    }

    /// Pointer positions of the moves, ending exactly at `to`.
    pub fn path(&self) -> Vec<[f32; 2]> {
        let steps = self.steps.max(1);
        (1..=steps)
            .map(|step| {
                let t = step as f32 / steps as f32;
                [
                    self.from[0] + (self.to[0] - self.from[0]) * t,
                    self.from[1] + (self.to[1] - self.from[1]) * t,
                ]
            })
            .collect()
    }
}

fn default_gestures() -> Vec<Gesture> {
    vec![
        // palette: from the center towards the saturated, bright corner
        Gesture::new([260.0, 260.0], [385.0, 135.0]),
        // hue knob: from red to cyan
        Gesture::new([10.0, 540.0], [260.0, 540.0]),
    ]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("huepick-out")
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    pub log_level: LogLevel,

    /// Picker style, quality and input scheme
    pub picker: PickerConfig,

    /// Color set silently before any gesture
    pub initial_color: Option<Rgb>,

    /// Gestures replayed in order
    pub gestures: Vec<Gesture>,

    /// Directory the PNG files are written to
    pub output_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            picker: PickerConfig::default(),
            initial_color: None,
            gestures: default_gestures(),
            output_dir: default_output_dir(),
        }
    }
}

impl DemoConfig {
    /// Serialize configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(DemoError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Self, DemoError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_ui::{InputScheme, ValueScale};

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DemoConfig::from_json("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.gestures.len(), 2);
        assert_eq!(config.picker.style.palette_width, 500.0);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "log_level": "debug",
            "picker": {
                "style": { "palette_height": 300, "value_scale": "palette_height" },
                "quality": 2.0,
                "input": { "press": "touchstart", "moved": "touchmove", "release": "touchend" }
            },
            "initial_color": { "r": 0, "g": 128, "b": 255 },
            "gestures": [ { "from": [1, 2], "to": [3, 4] } ]
        }"#;
        let config = DemoConfig::from_json(json).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.picker.style.palette_width, 500.0);
        assert_eq!(config.picker.style.palette_height, 300.0);
        assert_eq!(config.picker.style.value_scale, ValueScale::PaletteHeight);
        assert_eq!(config.picker.quality, Some(2.0));
        assert_eq!(config.picker.input, Some(InputScheme::TOUCH));
        assert_eq!(config.initial_color, Some(Rgb::new(0, 128, 255)));
        assert_eq!(config.gestures[0].steps, 8);
    }

    #[test]
    fn test_version_too_new() {
        let result = DemoConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(
            result,
            Err(DemoError::VersionTooNew {
                file_version: 99,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DemoConfig::from_json("{ not json"),
            Err(DemoError::Json(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = DemoConfig::default();
        config.log_level = LogLevel::Trace;
        config.initial_color = Some(Rgb::new(1, 2, 3));
        let json = config.to_json().unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_gesture_path_ends_at_target() {
        let gesture = Gesture {
            from: [0.0, 0.0],
            to: [100.0, -50.0],
            steps: 4,
        };
        let path = gesture.path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], [25.0, -12.5]);
        assert_eq!(path[3], [100.0, -50.0]);

        let single = Gesture { steps: 0, ..gesture };
        assert_eq!(single.path(), vec![[100.0, -50.0]]);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}
