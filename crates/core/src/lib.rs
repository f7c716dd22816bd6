//! # Stepcast Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The action-to-step detection pipeline (confidence, debounce, captions)
//! - The action buffer that sequences concurrent event sources
//! - Foreground context tracking and app plugins
//! - Port interfaces (traits) the platform layer implements
//!
//! ## Architecture Principles
//! - Only depends on `stepcast-domain`
//! - No OS, file, or network code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod capture;
pub mod detection;
pub mod plugins;
pub mod tracking;

// Re-export specific items to avoid ambiguity
pub use capture::{build_key_combo, AppSwitchFilter, Modifiers, SessionClock, Viewport};
pub use detection::{ActionBuffer, StepCallback, StepDetector};
pub use plugins::ports::{AccessibilityNode, FocusedWindowSource};
pub use plugins::{AppPlugin, PluginRegistry};
pub use tracking::ports::ForegroundAppProvider;
pub use tracking::ContextTracker;
