//! Configuration for the pickers demo application.
//!
//! Loaded from `~/.config/pickers/pickers.toml` and provides window,
//! logging, and default picker settings. The component library itself
//! is configured through props; this file only concerns the binary.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::{choose_base_strategy, BaseStrategy};
use serde::Deserialize;

/// Application configuration loaded from `pickers.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickersConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub picker: PickerConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Default picker behavior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// strftime display format for the text field.
    pub format: Option<String>,
    /// Keyboard-entry mode.
    pub keyboard: bool,
    /// Show only the calendar in the popover.
    pub only_calendar: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
}

impl Default for PickersConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
            picker: PickerConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pickers-demo".to_string(),
            width: 720.0,
            height: 480.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            level: "info".to_string(),
        }
    }
}

impl PickersConfig {
    /// Load configuration from the default location
    /// (`~/.config/pickers/pickers.toml`).
    ///
    /// Falls back to defaults if the file doesn't exist. Returns an
    /// error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let strategy = choose_base_strategy()?;
        let config_path = strategy.config_dir().join("pickers").join("pickers.toml");
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<PickersConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the field display format.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.picker.format = Some(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = PickersConfig::default();
        assert_eq!(config.window.title, "pickers-demo");
        assert!((config.window.width - 720.0).abs() < f64::EPSILON);
        assert!((config.window.height - 480.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.picker.format, None);
        assert!(!config.picker.keyboard);
        assert!(!config.picker.only_calendar);
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = PickersConfig::default()
            .with_window_title("My App")
            .with_window_size(800.0, 600.0)
            .with_log_level("debug")
            .with_format("%d/%m/%Y");

        assert_eq!(config.window.title, "My App");
        assert!((config.window.width - 800.0).abs() < f64::EPSILON);
        assert!((config.window.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.picker.format.as_deref(), Some("%d/%m/%Y"));
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[window]
title = "custom"

[picker]
keyboard = true
"#;
        let config = toml::from_str::<PickersConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.window.title, "custom");
        // Width should be default
        assert!((config.window.width - 720.0).abs() < f64::EPSILON);
        assert!(config.picker.keyboard);
        // Format should be default
        assert_eq!(config.picker.format, None);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pickers.toml");
        std::fs::write(&path, "[picker]\nformat = \"%H:%M\"\n").expect("write config");

        let config = PickersConfig::load_from(&path).expect("should load");
        assert_eq!(config.picker.format.as_deref(), Some("%H:%M"));
        assert_eq!(config.window.title, "pickers-demo");
    }

    #[test]
    fn load_from_nonexistent_path_returns_error() {
        let result = PickersConfig::load_from(Path::new("/nonexistent/pickers.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_malformed_file_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pickers.toml");
        std::fs::write(&path, "[window\ntitle = ").expect("write config");

        assert!(PickersConfig::load_from(&path).is_err());
    }
}
