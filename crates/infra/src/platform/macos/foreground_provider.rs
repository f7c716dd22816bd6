//! macOS implementation of [`ForegroundAppProvider`]
//!
//! App name and bundle id come from NSWorkspace and need no permission. The
//! window title needs Accessibility; without it the provider runs in
//! app-only mode and leaves `window_title` empty.

use objc2_app_kit::NSWorkspace;
use stepcast_core::ForegroundAppProvider;
use stepcast_domain::{AppContext, Result as DomainResult};

use super::ax_helpers::{check_ax_permission, focused_window_title};
use super::error_helpers::{ax_permission_error, workspace_error};

/// Reads the frontmost application via NSWorkspace.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOsForegroundProvider;

impl MacOsForegroundProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ForegroundAppProvider for MacOsForegroundProvider {
    fn frontmost_app(&self) -> DomainResult<AppContext> {
        let workspace = NSWorkspace::sharedWorkspace();
        let frontmost_app =
            workspace.frontmostApplication().ok_or_else(|| workspace_error("frontmost application"))?;

        let app_name = frontmost_app.localizedName().map(|name| name.to_string());
        let bundle_id = frontmost_app.bundleIdentifier().map(|id| id.to_string());
        let pid = frontmost_app.processIdentifier();

        let window_title = if check_ax_permission(false)? {
            focused_window_title(pid)
        } else {
            let permission_error = ax_permission_error();
            tracing::warn!(
                error = %permission_error,
                bundle_id = ?bundle_id,
                "Window title unavailable"
            );
            None
        };

        tracing::debug!(
            app_name = ?app_name,
            bundle_id = ?bundle_id,
            pid = pid,
            has_window_title = window_title.is_some(),
            "Fetched frontmost application"
        );

        Ok(AppContext { bundle_id, app_name, window_title })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmost_app_has_identity() {
        // A desktop session always has some frontmost app; headless CI may not.
        if let Ok(context) = MacOsForegroundProvider::new().frontmost_app() {
            assert!(context.app_name.is_some() || context.bundle_id.is_some());
        }
    }
}
