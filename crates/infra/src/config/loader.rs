//! Configuration loader
//!
//! Loads recorder configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If any `STEPCAST_*` variable is set, defaults are overlaid with the
//!    environment
//! 2. Otherwise falls back to a config file found by probing
//! 3. With neither, the shipped defaults are used
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `STEPCAST_CONFIDENCE_THRESHOLD`: Minimum confidence for a step (0..=1)
//! - `STEPCAST_MIN_STEP_INTERVAL`: Debounce window in seconds
//! - `STEPCAST_PLUGIN_CACHE_TTL`: Plugin output cache TTL in seconds
//! - `STEPCAST_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `STEPCAST_LOG_JSON`: Emit JSON log lines (true/false)
//! - `STEPCAST_LOG_DIR`: Also write daily log files here
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./stepcast.json` or `./stepcast.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use stepcast_domain::{Config, Result, StepcastError};

const ENV_CONFIDENCE_THRESHOLD: &str = "STEPCAST_CONFIDENCE_THRESHOLD";
const ENV_MIN_STEP_INTERVAL: &str = "STEPCAST_MIN_STEP_INTERVAL";
const ENV_PLUGIN_CACHE_TTL: &str = "STEPCAST_PLUGIN_CACHE_TTL";
const ENV_LOG_LEVEL: &str = "STEPCAST_LOG_LEVEL";
const ENV_LOG_JSON: &str = "STEPCAST_LOG_JSON";
const ENV_LOG_DIR: &str = "STEPCAST_LOG_DIR";

const ENV_KEYS: &[&str] = &[
    ENV_CONFIDENCE_THRESHOLD,
    ENV_MIN_STEP_INTERVAL,
    ENV_PLUGIN_CACHE_TTL,
    ENV_LOG_LEVEL,
    ENV_LOG_JSON,
    ENV_LOG_DIR,
];

const CONFIG_FILE_NAMES: &[&str] = &["stepcast.json", "stepcast.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// Environment first, then a probed config file, then defaults. The result
/// is always validated.
///
/// # Errors
/// Returns `StepcastError::Config` if:
/// - An environment variable has an unparsable value
/// - A config file exists but cannot be read or parsed
/// - The resulting configuration fails validation
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(StepcastError::Config(reason)) if reason.starts_with("No STEPCAST_") => {
            tracing::debug!("No configuration in environment, trying file");
        }
        Err(e) => return Err(e),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Unset variables keep their default. At least one `STEPCAST_*` variable
/// must be present.
///
/// # Errors
/// Returns `StepcastError::Config` if no variable is set, a value does not
/// parse, or the result fails validation.
pub fn load_from_env() -> Result<Config> {
    if !ENV_KEYS.iter().any(|key| std::env::var_os(key).is_some()) {
        return Err(StepcastError::Config(
            "No STEPCAST_* environment variables set".to_string(),
        ));
    }

    let mut config = Config::default();

    if let Some(threshold) = env_parse::<f64>(ENV_CONFIDENCE_THRESHOLD)? {
        config.detection.confidence_threshold = threshold;
    }
    if let Some(interval) = env_parse::<f64>(ENV_MIN_STEP_INTERVAL)? {
        config.detection.min_step_interval_secs = interval;
    }
    if let Some(ttl) = env_parse::<u64>(ENV_PLUGIN_CACHE_TTL)? {
        config.capture.plugin_cache_ttl_secs = ttl;
    }
    if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);
    if let Ok(directory) = std::env::var(ENV_LOG_DIR) {
        config.logging.directory = Some(directory);
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields take their defaults.
///
/// # Errors
/// Returns `StepcastError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or values fail validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StepcastError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StepcastError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| StepcastError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| StepcastError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| StepcastError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(StepcastError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent and grandparent, then
/// the executable's directory and its parent and grandparent.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `StepcastError::Config` if the variable is set but does not parse.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| StepcastError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
