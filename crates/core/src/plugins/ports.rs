//! Port interfaces for accessibility-tree access
//!
//! The browser plugin searches the focused window's element tree for the
//! address bar. Infra wraps `AXUIElement`; tests use in-memory trees.

/// One element of an accessibility tree.
///
/// Attribute reads that fail or return a non-string value are `None`.
pub trait AccessibilityNode {
    /// `AXRole`, e.g. `"AXTextField"`
    fn role(&self) -> Option<String>;

    /// `AXRoleDescription`, e.g. `"address and search bar"`
    fn role_description(&self) -> Option<String>;

    /// `AXValue` when it is a string
    fn value(&self) -> Option<String>;

    /// Direct children in tree order
    fn children(&self) -> Vec<Box<dyn AccessibilityNode>>;
}

/// Resolves the focused window of a running application.
pub trait FocusedWindowSource: Send + Sync {
    /// Root node of the focused window of the app with `bundle_id`, or
    /// `None` if the app is not running, has no window, or access is denied.
    fn focused_window(&self, bundle_id: &str) -> Option<Box<dyn AccessibilityNode>>;
}
