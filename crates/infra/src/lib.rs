//! # Stepcast Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON, TOML)
//! - Logging initialisation
//! - Platform-specific code (macOS NSWorkspace and Accessibility API)
//! - The plugin output cache
//! - The [`Recorder`] that wires a recording session together
//!
//! ## Architecture
//! - Implements traits defined in `stepcast-core`
//! - Depends on `stepcast-domain` and `stepcast-core`
//! - Contains all "impure" code (I/O, platform APIs)

pub mod cache;
pub mod config;
pub mod observability;
pub mod platform;
pub mod recorder;

// Re-export commonly used items
pub use cache::PluginContextCache;
pub use observability::{init_logging, LoggingGuard};
pub use platform::{
    check_ax_permission, default_foreground_provider, default_plugins, primary_viewport,
    ActivationCallback, AppActivationListener,
};
pub use recorder::{Recorder, StepStream};
