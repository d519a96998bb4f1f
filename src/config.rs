//! Editor configuration
//!
//! Tunables for input sensitivity and the initial window. Values start from
//! [`EditorConfig::default`], can be adjusted with the `with_*` builder
//! methods and overridden from the environment with [`EditorConfig::from_env`].

use log::warn;
use std::str::FromStr;

/// Environment variable overriding [`EditorConfig::mouse_sensitivity`].
pub const MOUSE_SENSITIVITY_VAR: &str = "STAGEHAND_MOUSE_SENSITIVITY";
/// Environment variable overriding [`EditorConfig::wheel_sensitivity`].
pub const WHEEL_SENSITIVITY_VAR: &str = "STAGEHAND_WHEEL_SENSITIVITY";
/// Environment variable overriding the initial window width.
pub const WINDOW_WIDTH_VAR: &str = "STAGEHAND_WINDOW_WIDTH";
/// Environment variable overriding the initial window height.
pub const WINDOW_HEIGHT_VAR: &str = "STAGEHAND_WINDOW_HEIGHT";

/// Runtime configuration of the editor
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Pixels of pointer travel per unit of translation or scale.
    pub mouse_sensitivity: f32,
    /// Wheel steps per unit of camera nudge.
    pub wheel_sensitivity: f32,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Clear color of the viewport (RGBA).
    pub background_color: [f64; 4],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 100.0,
            wheel_sensitivity: 10.0,
            window_title: "Stagehand".to_string(),
            window_width: 960,
            window_height: 540,
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl EditorConfig {
    /// Default configuration with any `STAGEHAND_*` environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by variable name
    ///
    /// Values that fail to parse, or that are not strictly positive, are
    /// reported and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_positive::<f32>(&lookup, MOUSE_SENSITIVITY_VAR) {
            self.mouse_sensitivity = value;
        }
        if let Some(value) = parse_positive::<f32>(&lookup, WHEEL_SENSITIVITY_VAR) {
            self.wheel_sensitivity = value;
        }
        if let Some(value) = parse_positive::<u32>(&lookup, WINDOW_WIDTH_VAR) {
            self.window_width = value;
        }
        if let Some(value) = parse_positive::<u32>(&lookup, WINDOW_HEIGHT_VAR) {
            self.window_height = value;
        }
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn with_wheel_sensitivity(mut self, sensitivity: f32) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.window_title = title.to_owned();
        self
    }

    /// Initial aspect ratio of the viewport
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Some(value),
        _ => {
            warn!("ignoring {}={:?}: expected a positive number", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor_constants() {
        let config = EditorConfig::default();
        assert_eq!(config.mouse_sensitivity, 100.0);
        assert_eq!(config.wheel_sensitivity, 10.0);
        assert_eq!((config.window_width, config.window_height), (960, 540));
    }

    #[test]
    fn test_overrides_apply_valid_values_only() {
        let config = EditorConfig::default().with_overrides(|name| match name {
            MOUSE_SENSITIVITY_VAR => Some("250".to_string()),
            WHEEL_SENSITIVITY_VAR => Some("fast".to_string()),
            WINDOW_WIDTH_VAR => Some("0".to_string()),
            WINDOW_HEIGHT_VAR => Some(" 720 ".to_string()),
            _ => None,
        });

        assert_eq!(config.mouse_sensitivity, 250.0);
        assert_eq!(config.wheel_sensitivity, 10.0);
        assert_eq!(config.window_width, 960);
        assert_eq!(config.window_height, 720);
    }

    #[test]
    fn test_builder_methods() {
        let config = EditorConfig::default()
            .with_mouse_sensitivity(50.0)
            .with_window_size(800, 400)
            .with_title("Test");

        assert_eq!(config.mouse_sensitivity, 50.0);
        assert_eq!(config.aspect_ratio(), 2.0);
        assert_eq!(config.window_title, "Test");
    }
}
