//! Configuration structures
//!
//! Every section defaults to the values the recorder ships with, so an empty
//! file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCESSIBILITY_MAX_DEPTH, CONFIDENCE_THRESHOLD, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, MIN_STEP_INTERVAL_SECS, PLUGIN_CACHE_TTL_SECS,
};
use crate::errors::{Result, StepcastError};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub capture: CaptureConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Validate every section.
    ///
    /// # Errors
    /// Returns `StepcastError::Config` naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.detection.validate()?;
        self.capture.validate()
    }
}

/// Step detector tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Actions scoring below this are noise
    pub confidence_threshold: f64,
    /// Minimum gap after the last accepted step, in seconds
    pub min_step_interval_secs: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            min_step_interval_secs: MIN_STEP_INTERVAL_SECS,
        }
    }
}

impl DetectionConfig {
    /// # Errors
    /// Threshold outside [0, 1] or a negative / non-finite interval.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(StepcastError::Config(format!(
                "confidence_threshold must be within [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        if !self.min_step_interval_secs.is_finite() || self.min_step_interval_secs < 0.0 {
            return Err(StepcastError::Config(format!(
                "min_step_interval_secs must be a non-negative number, got {}",
                self.min_step_interval_secs
            )));
        }
        Ok(())
    }
}

/// Capture-side defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Used when the primary screen frame is unavailable
    pub default_viewport_width: u32,
    pub default_viewport_height: u32,
    /// How long plugin output for a bundle id stays cached
    pub plugin_cache_ttl_secs: u64,
    /// Depth bound for accessibility tree walks
    pub accessibility_max_depth: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            default_viewport_width: DEFAULT_VIEWPORT_WIDTH,
            default_viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            plugin_cache_ttl_secs: PLUGIN_CACHE_TTL_SECS,
            accessibility_max_depth: ACCESSIBILITY_MAX_DEPTH,
        }
    }
}

impl CaptureConfig {
    /// # Errors
    /// Zero-sized default viewport.
    pub fn validate(&self) -> Result<()> {
        if self.default_viewport_width == 0 || self.default_viewport_height == 0 {
            return Err(StepcastError::Config(format!(
                "default viewport must be non-empty, got {}x{}",
                self.default_viewport_width, self.default_viewport_height
            )));
        }
        Ok(())
    }
}

/// Logging output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Also write daily-rolled log files here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false, directory: None }
    }
}
