//! Port interfaces for foreground tracking
//!
//! The platform layer implements these; core only ever sees the trait.

use stepcast_domain::{AppContext, Result};

/// Reads the frontmost application from the operating system
///
/// Implementations may block on accessibility queries (window title), so
/// callers should not hold unrelated locks across `frontmost_app`.
pub trait ForegroundAppProvider: Send + Sync {
    /// Bundle id, display name and focused-window title of the frontmost app
    ///
    /// # Errors
    /// `StepcastError::Platform` when the OS cannot answer at all. Missing
    /// individual fields are `None`, not errors.
    fn frontmost_app(&self) -> Result<AppContext>;
}
