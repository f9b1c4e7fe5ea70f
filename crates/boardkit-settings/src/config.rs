//! Configuration and settings management for BoardKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files.
//!
//! Configuration is organized into logical sections:
//! - Viewport settings (zoom levels, scale limits, fit padding, view size)
//! - Gesture settings (pinch recognition)
//! - Resize settings (anchor size, deferred text reflow)
//! - Persistence settings (where camera snapshots are stored)

use boardkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Predefined zoom levels for discrete zoom stepping, largest first
    pub scale_levels: Vec<f64>,
    /// Smallest allowed camera scale
    pub min_scale: f64,
    /// Largest allowed camera scale
    pub max_scale: f64,
    /// Padding around a fitted rectangle, in percent of its size
    pub fit_padding_percent: f64,
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Zoom factor applied per wheel notch
    pub wheel_zoom_step: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            scale_levels: constants::DEFAULT_SCALE_LEVELS.to_vec(),
            min_scale: constants::MIN_SCALE,
            max_scale: constants::MAX_SCALE,
            fit_padding_percent: constants::VIEW_PADDING_PERCENT,
            width: constants::DEFAULT_VIEWPORT_WIDTH,
            height: constants::DEFAULT_VIEWPORT_HEIGHT,
            wheel_zoom_step: constants::WHEEL_ZOOM_STEP,
        }
    }
}

impl ViewportSettings {
    /// Clamps a scale into `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.max(self.min_scale).min(self.max_scale)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.scale_levels.is_empty() {
            return Err(ConfigError::Inconsistent(
                "scale_levels must not be empty".to_string(),
            ));
        }
        if self
            .scale_levels
            .windows(2)
            .any(|pair| pair[0] <= pair[1])
        {
            return Err(ConfigError::Inconsistent(
                "scale_levels must be strictly descending".to_string(),
            ));
        }
        if self.scale_levels.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ConfigError::Inconsistent(
                "scale_levels must be positive".to_string(),
            ));
        }
        if !(self.min_scale > 0.0 && self.min_scale.is_finite()) {
            return Err(out_of_range("viewport.min_scale", self.min_scale));
        }
        if !(self.max_scale > self.min_scale && self.max_scale.is_finite()) {
            return Err(out_of_range("viewport.max_scale", self.max_scale));
        }
        if !(self.fit_padding_percent >= 0.0 && self.fit_padding_percent < 100.0) {
            return Err(out_of_range(
                "viewport.fit_padding_percent",
                self.fit_padding_percent,
            ));
        }
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(out_of_range("viewport.width", self.width));
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err(out_of_range("viewport.height", self.height));
        }
        if !(self.wheel_zoom_step > 1.0 && self.wheel_zoom_step.is_finite()) {
            return Err(out_of_range(
                "viewport.wheel_zoom_step",
                self.wheel_zoom_step,
            ));
        }
        Ok(())
    }
}

/// Two-finger gesture settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Minimum finger distance change (pixels) for a pinch
    pub pinch_distance_threshold_px: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            pinch_distance_threshold_px: constants::PINCH_DISTANCE_THRESHOLD_PX,
        }
    }
}

/// Resize tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    /// Anchor hit radius in screen pixels
    pub anchor_radius_px: f64,
    /// Text length above which reflow waits for pointer-up
    pub long_text_threshold: usize,
    /// Minimum distance (world units) kept from the opposite edge while a
    /// deferred resize is dragged
    pub deferred_min_extent: f64,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            anchor_radius_px: constants::ANCHOR_RADIUS_PX,
            long_text_threshold: constants::LONG_TEXT_THRESHOLD,
            deferred_min_extent: constants::DEFERRED_MIN_EXTENT,
        }
    }
}

/// Camera snapshot persistence settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceSettings {
    /// Whether camera snapshots are written at all
    pub enabled: bool,
    /// Directory for the file store; platform data dir when unset
    pub directory: Option<PathBuf>,
}

/// Complete BoardKit configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// Gesture settings
    pub gesture: GestureSettings,
    /// Resize settings
    pub resize: ResizeSettings,
    /// Persistence settings
    pub persistence: PersistenceSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.viewport.validate()?;

        if !(self.gesture.pinch_distance_threshold_px >= 0.0) {
            return Err(out_of_range(
                "gesture.pinch_distance_threshold_px",
                self.gesture.pinch_distance_threshold_px,
            ));
        }
        if !(self.resize.anchor_radius_px >= 0.0 && self.resize.anchor_radius_px.is_finite()) {
            return Err(out_of_range(
                "resize.anchor_radius_px",
                self.resize.anchor_radius_px,
            ));
        }
        if !(self.resize.deferred_min_extent >= 0.0
            && self.resize.deferred_min_extent.is_finite())
        {
            return Err(out_of_range(
                "resize.deferred_min_extent",
                self.resize.deferred_min_extent,
            ));
        }
        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
