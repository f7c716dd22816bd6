//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Step detection
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;
pub const MIN_STEP_INTERVAL_SECS: f64 = 0.5;
pub const SCREENSHOT_KEY_PREFIX: &str = "step-";
pub const SCREENSHOT_KEY_EXTENSION: &str = ".jpg";

// Captions
pub const TYPED_TEXT_PREVIEW_LENGTH: usize = 30;
pub const TRUNCATE_SUFFIX: &str = "...";

// Capture defaults (primary screen frame fallback)
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 2560;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1600;

// Accessibility
pub const ACCESSIBILITY_ROLE_PREFIX: &str = "AX";
pub const ACCESSIBILITY_MAX_DEPTH: usize = 10;

// Plugin enrichment cache
pub const PLUGIN_CACHE_TTL_SECS: u64 = 5;
