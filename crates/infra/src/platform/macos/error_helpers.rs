//! Error mapping helpers for macOS platform operations
//!
//! - Missing NSWorkspace data → `StepcastError::Platform`
//! - Accessibility refusals → `StepcastError::Accessibility`
//! - Observer registration failures → `StepcastError::Platform`

use stepcast_domain::StepcastError;

/// Create an accessibility permission denied error.
///
/// Directs the user to the System Settings pane where the grant lives.
#[inline]
pub(crate) fn ax_permission_error() -> StepcastError {
    StepcastError::Accessibility(
        "Accessibility permission denied. Enable in: \
         System Settings > Privacy & Security > Accessibility"
            .to_string(),
    )
}

/// NSWorkspace returned no value for `what`.
#[inline]
pub(crate) fn workspace_error(what: &str) -> StepcastError {
    StepcastError::Platform(format!("NSWorkspace returned no {what}"))
}

/// An app activation observer could not be (un)registered.
#[inline]
pub(crate) fn observer_error(reason: &str) -> StepcastError {
    StepcastError::Platform(format!("App activation observer: {reason}"))
}
