//! macOS Platform Integration
//!
//! NSWorkspace and Accessibility API adapters for the core ports.
//!
//! # Modules
//!
//! - [`foreground_provider`] - `ForegroundAppProvider` via NSWorkspace
//! - [`accessibility`] - `FocusedWindowSource` and click hit-testing
//! - [`ax_helpers`] - Low-level Accessibility API bindings
//! - [`event_listener`] - App activation notifications
//! - [`screen`] - Primary display frame
//!
//! # Permission Requirements
//!
//! - **NSWorkspace**: No special permissions (app name, bundle ID, PID)
//! - **Accessibility API**: Requires user approval in System Settings for
//!   window titles, element lookups and browser URLs
//!
//! Without Accessibility permission the adapters degrade to app-only mode.

pub mod accessibility;
pub mod ax_helpers;
pub(crate) mod error_helpers;
pub mod event_listener;
pub mod foreground_provider;
pub mod screen;

pub use accessibility::{AxNode, MacOsAccessibility};
pub use ax_helpers::check_ax_permission;
pub use event_listener::MacOsActivationListener;
pub use foreground_provider::MacOsForegroundProvider;
pub use screen::main_display_viewport;
