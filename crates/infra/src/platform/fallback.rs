//! Stubs for targets without NSWorkspace / Accessibility

use stepcast_core::{AccessibilityNode, FocusedWindowSource};

/// Window source that never finds a window.
///
/// Browser plugin output degrades to an empty context.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAccessibility;

impl FocusedWindowSource for NoAccessibility {
    fn focused_window(&self, _bundle_id: &str) -> Option<Box<dyn AccessibilityNode>> {
        None
    }
}

#[cfg(not(target_os = "macos"))]
pub use self::unsupported::{FallbackActivationListener, FallbackForegroundProvider};

#[cfg(not(target_os = "macos"))]
mod unsupported {
    use stepcast_core::ForegroundAppProvider;
    use stepcast_domain::{AppContext, Result as DomainResult, StepcastError};

    use crate::platform::{ActivationCallback, AppActivationListener};

    /// Foreground provider for unsupported platforms.
    ///
    /// Every query returns a platform error; the context tracker keeps its
    /// empty context.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FallbackForegroundProvider;

    impl FallbackForegroundProvider {
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    impl ForegroundAppProvider for FallbackForegroundProvider {
        fn frontmost_app(&self) -> DomainResult<AppContext> {
            Err(StepcastError::Platform(
                "Foreground app tracking is only supported on macOS".to_string(),
            ))
        }
    }

    /// Activation listener for unsupported platforms.
    #[derive(Debug, Default)]
    pub struct FallbackActivationListener;

    impl FallbackActivationListener {
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    impl AppActivationListener for FallbackActivationListener {
        fn start(&mut self, _callback: ActivationCallback) -> DomainResult<()> {
            Err(StepcastError::Platform(
                "App activation monitoring is only supported on macOS".to_string(),
            ))
        }

        fn stop(&mut self) -> DomainResult<()> {
            Ok(())
        }

        fn is_supported() -> bool {
            false
        }
    }
}
