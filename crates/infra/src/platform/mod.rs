//! Platform-specific implementations
//!
//! Adapters for the core ports plus a few helpers that pick the right
//! adapter for the current target.
//!
//! # Platform Support
//!
//! - **macOS**: Full support via Accessibility APIs and NSWorkspace
//! - **Other platforms**: Fallback stubs (platform errors, no windows)

use std::sync::Arc;

use stepcast_core::{FocusedWindowSource, ForegroundAppProvider, PluginRegistry, Viewport};
use stepcast_domain::{AppContext, CaptureConfig, Result as DomainResult};

#[cfg(target_os = "macos")]
pub mod macos;

pub mod fallback;

pub use fallback::NoAccessibility;
#[cfg(not(target_os = "macos"))]
pub use fallback::{FallbackActivationListener, FallbackForegroundProvider};
#[cfg(target_os = "macos")]
pub use macos::{MacOsAccessibility, MacOsActivationListener, MacOsForegroundProvider};

/// Invoked with the newly frontmost app on every activation.
pub type ActivationCallback = Box<dyn Fn(AppContext) + Send + Sync>;

/// OS hook reporting application activations without polling.
pub trait AppActivationListener: Send + Sync {
    /// Start delivering activations to `callback`.
    ///
    /// # Errors
    /// `StepcastError::Platform` if already started or unsupported.
    fn start(&mut self, callback: ActivationCallback) -> DomainResult<()>;

    /// Stop delivering activations. Idempotent.
    ///
    /// # Errors
    /// `StepcastError::Platform` if the OS hook could not be removed.
    fn stop(&mut self) -> DomainResult<()>;

    /// Whether this platform can deliver activations at all.
    fn is_supported() -> bool
    where
        Self: Sized;
}

/// Foreground provider for the current platform.
#[must_use]
pub fn default_foreground_provider() -> Arc<dyn ForegroundAppProvider> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(MacOsForegroundProvider::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(FallbackForegroundProvider::new())
    }
}

/// Focused-window source for the current platform.
#[must_use]
pub fn default_window_source(capture: &CaptureConfig) -> Arc<dyn FocusedWindowSource> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(MacOsAccessibility::new(capture.accessibility_max_depth))
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = capture;
        Arc::new(NoAccessibility)
    }
}

/// Default plugin set with the configured tree depth bound.
#[must_use]
pub fn default_plugins(capture: &CaptureConfig) -> PluginRegistry {
    PluginRegistry::with_defaults_and_depth(default_window_source(capture), capture.accessibility_max_depth)
}

/// Primary screen frame, or the configured fallback size.
#[must_use]
pub fn primary_viewport(capture: &CaptureConfig) -> Viewport {
    let fallback = Viewport::new(capture.default_viewport_width, capture.default_viewport_height);

    #[cfg(target_os = "macos")]
    {
        macos::main_display_viewport().unwrap_or(fallback)
    }
    #[cfg(not(target_os = "macos"))]
    {
        fallback
    }
}

/// Check Accessibility permission, optionally prompting the user.
///
/// # Errors
/// `StepcastError::Platform` on platforms without an Accessibility API.
pub fn check_ax_permission(prompt: bool) -> DomainResult<bool> {
    #[cfg(target_os = "macos")]
    {
        macos::check_ax_permission(prompt)
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = prompt;
        Err(stepcast_domain::StepcastError::Platform(
            "Accessibility API is only available on macOS".to_string(),
        ))
    }
}
