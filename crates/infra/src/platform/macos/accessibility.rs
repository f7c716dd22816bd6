//! Accessibility tree access for plugins and the click path

use objc2_app_kit::NSWorkspace;
use stepcast_core::{AccessibilityNode, FocusedWindowSource};
use stepcast_domain::constants::ACCESSIBILITY_MAX_DEPTH;
use stepcast_domain::ElementDescriptor;

use super::ax_helpers::{check_ax_permission, focused_window, AxElement};

/// [`AccessibilityNode`] backed by a live AX element.
pub struct AxNode(AxElement);

impl AccessibilityNode for AxNode {
    fn role(&self) -> Option<String> {
        self.0.string_attribute("AXRole")
    }

    fn role_description(&self) -> Option<String> {
        self.0.string_attribute("AXRoleDescription")
    }

    fn value(&self) -> Option<String> {
        self.0.string_attribute("AXValue")
    }

    fn children(&self) -> Vec<Box<dyn AccessibilityNode>> {
        self.0
            .children()
            .into_iter()
            .map(|child| Box::new(AxNode(child)) as Box<dyn AccessibilityNode>)
            .collect()
    }
}

/// Focused windows by bundle id, and hit-testing for clicks.
#[derive(Debug, Clone, Copy)]
pub struct MacOsAccessibility {
    max_parent_depth: usize,
}

impl Default for MacOsAccessibility {
    fn default() -> Self {
        Self::new(ACCESSIBILITY_MAX_DEPTH)
    }
}

impl MacOsAccessibility {
    /// `max_parent_depth` bounds the parent chain collected by
    /// [`element_at`](Self::element_at).
    #[must_use]
    pub fn new(max_parent_depth: usize) -> Self {
        Self { max_parent_depth }
    }

    /// Describe the element under a top-left-origin screen point.
    ///
    /// The role is always present (empty when the element reports none).
    /// The title falls back to `AXDescription`; the parent chain lists
    /// ancestor roles nearest first.
    #[must_use]
    pub fn element_at(&self, x: f64, y: f64) -> Option<ElementDescriptor> {
        if !check_ax_permission(false).unwrap_or(false) {
            return None;
        }

        let element = AxElement::system_wide()?.element_at_position(x, y)?;

        let role = element.string_attribute("AXRole").unwrap_or_default();
        let title = element
            .string_attribute("AXTitle")
            .or_else(|| element.string_attribute("AXDescription"));
        let value = element.string_attribute("AXValue");

        let parent_chain = ancestor_roles(
            element.element_attribute("AXParent"),
            self.max_parent_depth,
            |parent| parent.string_attribute("AXRole"),
            |parent| parent.element_attribute("AXParent"),
        );

        tracing::trace!(x, y, role = %role, parents = parent_chain.len(), "Element under click");

        Some(ElementDescriptor { role, title, value, parent_chain })
    }
}

/// Roles of at most `max_depth` ancestors, nearest first.
///
/// Every ancestor visited counts toward the bound, including ones that
/// report no role.
fn ancestor_roles<T>(
    first: Option<T>,
    max_depth: usize,
    role: impl Fn(&T) -> Option<String>,
    parent: impl Fn(&T) -> Option<T>,
) -> Vec<String> {
    let mut roles = Vec::new();
    let mut current = first;
    let mut visited = 0;
    while let Some(node) = current {
        if visited >= max_depth {
            break;
        }
        visited += 1;
        if let Some(node_role) = role(&node) {
            roles.push(node_role);
        }
        current = parent(&node);
    }
    roles
}

impl FocusedWindowSource for MacOsAccessibility {
    fn focused_window(&self, bundle_id: &str) -> Option<Box<dyn AccessibilityNode>> {
        let workspace = NSWorkspace::sharedWorkspace();
        let pid = workspace
            .runningApplications()
            .iter()
            .find(|app| app.bundleIdentifier().is_some_and(|id| id.to_string() == bundle_id))
            .map(|app| app.processIdentifier())?;

        focused_window(pid).map(|window| Box::new(AxNode(window)) as Box<dyn AccessibilityNode>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bundle_id_has_no_window() {
        assert!(MacOsAccessibility::default().focused_window("invalid.bundle.stepcast").is_none());
    }

    /// Ancestor `n` of an endless chain; every third one has no role.
    fn role_of(depth: &usize) -> Option<String> {
        (depth % 3 != 0).then(|| format!("AXGroup{depth}"))
    }

    #[test]
    fn test_roleless_ancestors_count_toward_depth() {
        let visited = std::cell::Cell::new(0);
        let roles = ancestor_roles(
            Some(1_usize),
            10,
            |depth| {
                visited.set(visited.get() + 1);
                role_of(depth)
            },
            |depth| Some(depth + 1),
        );

        assert_eq!(visited.get(), 10);
        assert_eq!(roles.len(), 7);
        assert_eq!(roles.first().map(String::as_str), Some("AXGroup1"));
    }

    #[test]
    fn test_ancestor_walk_stops_at_root() {
        let roles = ancestor_roles(Some(1_usize), 10, role_of, |depth| (*depth < 2).then(|| depth + 1));
        assert_eq!(roles, vec!["AXGroup1", "AXGroup2"]);
    }

    #[test]
    fn test_element_at_offscreen_point_does_not_panic() {
        let _ = MacOsAccessibility::default().element_at(-10_000.0, -10_000.0);
    }
}
