//! Confidence scoring for raw actions
//!
//! A score in [0, 1] estimating how likely an action is an intentional,
//! meaningful UI interaction. Pure function of the action kind and, for
//! clicks, the accessibility role of the clicked element.

use stepcast_domain::{ActionKind, RawAction};

/// Roles whose clicks count as unambiguous intent.
const INTERACTIVE_ROLES: &[&str] = &[
    "AXButton",
    "AXLink",
    "AXMenuItem",
    "AXMenuBarItem",
    "AXCheckBox",
    "AXRadioButton",
    "AXPopUpButton",
    "AXComboBox",
    "AXTextField",
    "AXTextArea",
    "AXTab",
    "AXToolbar",
    "AXDisclosureTriangle",
];

/// Check whether an accessibility role is an interactive control.
#[must_use]
pub fn is_interactive_role(role: &str) -> bool {
    INTERACTIVE_ROLES.contains(&role)
}

/// Score an action.
///
/// | Kind | Score |
/// |---|---|
/// | click on interactive role / manual marker | 1.0 |
/// | keyboard shortcut / menu selection | 0.9 |
/// | app switch / URL navigation | 0.8 |
/// | click on other element / dialog | 0.7 |
/// | drag | 0.6 |
/// | click without element | 0.5 |
/// | type | 0.4 |
/// | scroll | 0.1 |
/// | unknown | 0.0 |
#[must_use]
pub fn confidence(action: &RawAction) -> f64 {
    match action.kind {
        ActionKind::Click => match &action.element {
            Some(element) if is_interactive_role(&element.role) => 1.0,
            Some(_) => 0.7,
            None => 0.5,
        },
        ActionKind::KeyboardShortcut | ActionKind::MenuSelection => 0.9,
        ActionKind::AppSwitch | ActionKind::UrlNavigation => 0.8,
        // Pure typing is usually part of a larger step
        ActionKind::Type => 0.4,
        ActionKind::ManualMarker => 1.0,
        ActionKind::DialogInteraction => 0.7,
        ActionKind::Scroll => 0.1,
        ActionKind::Drag => 0.6,
        ActionKind::Unknown => 0.0,
    }
}
