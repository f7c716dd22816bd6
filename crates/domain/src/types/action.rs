//! Raw user actions as observed by the OS event sources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_enum_conversions;

/// Kind of interaction an event source observed.
///
/// The set is closed; nothing downstream synthesizes new kinds. Unknown wire
/// names deserialize to [`ActionKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Mouse click (left or right)
    Click,
    /// Typed text
    Type,
    /// Modifier + key combination
    KeyboardShortcut,
    /// Frontmost application changed
    AppSwitch,
    /// Browser navigated to a URL
    UrlNavigation,
    /// Menu item chosen
    MenuSelection,
    /// Drag gesture
    Drag,
    /// Scroll wheel / trackpad scroll
    Scroll,
    /// Interaction with a modal dialog
    DialogInteraction,
    /// User explicitly marked a step
    ManualMarker,
    /// Anything the event sources could not classify
    #[serde(other)]
    Unknown,
}

impl_domain_enum_conversions!(ActionKind {
    Click => "click",
    Type => "type",
    KeyboardShortcut => "keyboardShortcut",
    AppSwitch => "appSwitch",
    UrlNavigation => "urlNavigation",
    MenuSelection => "menuSelection",
    Drag => "drag",
    Scroll => "scroll",
    DialogInteraction => "dialogInteraction",
    ManualMarker => "manualMarker",
    Unknown => "unknown",
});

impl ActionKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Click,
        Self::Type,
        Self::KeyboardShortcut,
        Self::AppSwitch,
        Self::UrlNavigation,
        Self::MenuSelection,
        Self::Drag,
        Self::Scroll,
        Self::DialogInteraction,
        Self::ManualMarker,
        Self::Unknown,
    ];
}

/// Accessibility metadata about the UI element under a click.
///
/// `role` is always present; an element lookup that found nothing reports an
/// empty role rather than omitting the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Platform accessibility role, e.g. `AXButton`
    pub role: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    /// Ancestor roles in discovery order
    #[serde(default)]
    pub parent_chain: Vec<String>,
}

impl ElementDescriptor {
    /// Descriptor with a role and nothing else.
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into(), ..Self::default() }
    }

    /// Set the element title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the element value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the ancestor role chain.
    #[must_use]
    pub fn with_parent_chain<I, S>(mut self, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_chain = chain.into_iter().map(Into::into).collect();
        self
    }
}

/// One observed user interaction.
///
/// Created by an event source the instant an OS signal fires and consumed
/// exactly once by the action buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// Random per-action identifier
    pub id: Uuid,
    /// Wall-clock time the action was captured
    pub timestamp: DateTime<Utc>,
    /// Seconds since session start
    pub relative_time: f64,
    /// What the user did
    pub kind: ActionKind,
    /// Normalized to [0, 1] against the viewport, top-left origin
    pub click_x: Option<f64>,
    /// Normalized like `click_x`, measured from the top
    pub click_y: Option<f64>,
    /// Screen width in points at capture time
    pub viewport_width: u32,
    /// Screen height in points at capture time
    pub viewport_height: u32,
    /// Frontmost app bundle identifier, e.g. `com.apple.Safari`
    pub app_bundle_id: Option<String>,
    /// Frontmost app display name
    pub app_name: Option<String>,
    /// Title of the focused window
    pub window_title: Option<String>,
    /// Page URL when the app is a browser
    pub url: Option<String>,
    /// Accessibility element under the pointer, for clicks
    pub element: Option<ElementDescriptor>,
    /// Chord such as `Cmd+Shift+S`, for shortcuts
    pub key_combo: Option<String>,
    /// Entered text, for typing actions
    pub typed_text: Option<String>,
}

impl RawAction {
    /// Create an action of `kind` observed `relative_time` seconds into the
    /// session. Every optional field starts empty.
    #[must_use]
    pub fn new(relative_time: f64, kind: ActionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            relative_time,
            kind,
            click_x: None,
            click_y: None,
            viewport_width: 0,
            viewport_height: 0,
            app_bundle_id: None,
            app_name: None,
            window_title: None,
            url: None,
            element: None,
            key_combo: None,
            typed_text: None,
        }
    }

    /// Override the capture time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the normalized click point.
    #[must_use]
    pub fn with_click(mut self, x: f64, y: f64) -> Self {
        self.click_x = Some(x);
        self.click_y = Some(y);
        self
    }

    /// Set the screen size the click was normalized against.
    #[must_use]
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Attach foreground application metadata. Either part may be absent.
    #[must_use]
    pub fn with_app(mut self, bundle_id: Option<String>, app_name: Option<String>) -> Self {
        self.app_bundle_id = bundle_id;
        self.app_name = app_name;
        self
    }

    /// Set the app display name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the app bundle identifier.
    #[must_use]
    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.app_bundle_id = Some(bundle_id.into());
        self
    }

    /// Set the focused window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Some(title.into());
        self
    }

    /// Set the page URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach the accessibility element under the pointer.
    #[must_use]
    pub fn with_element(mut self, element: ElementDescriptor) -> Self {
        self.element = Some(element);
        self
    }

    /// Set the shortcut chord.
    #[must_use]
    pub fn with_key_combo(mut self, combo: impl Into<String>) -> Self {
        self.key_combo = Some(combo.into());
        self
    }

    /// Set the entered text.
    #[must_use]
    pub fn with_typed_text(mut self, text: impl Into<String>) -> Self {
        self.typed_text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_wire_names() {
        assert_eq!(serde_json::to_string(&ActionKind::KeyboardShortcut).unwrap(), "\"keyboardShortcut\"");
        assert_eq!(serde_json::to_string(&ActionKind::UrlNavigation).unwrap(), "\"urlNavigation\"");
        assert_eq!(ActionKind::DialogInteraction.to_string(), "dialogInteraction");
    }

    #[test]
    fn test_unknown_wire_name_maps_to_unknown() {
        let kind: ActionKind = serde_json::from_str("\"hover\"").unwrap();
        assert_eq!(kind, ActionKind::Unknown);
    }

    #[test]
    fn test_every_kind_parses_back() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.as_str().parse::<ActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_new_action_has_empty_optionals() {
        let action = RawAction::new(1.5, ActionKind::Click);
        assert_eq!(action.relative_time, 1.5);
        assert!(action.element.is_none());
        assert!(action.app_name.is_none());
        assert_eq!(action.viewport_width, 0);
    }

    #[test]
    fn test_action_ids_are_unique() {
        let a = RawAction::new(0.0, ActionKind::Click);
        let b = RawAction::new(0.0, ActionKind::Click);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_element_descriptor_parent_chain_field_name() {
        let element = ElementDescriptor::new("AXButton")
            .with_title("Submit")
            .with_parent_chain(["AXToolbar", "AXWindow"]);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["parent_chain"][0], "AXToolbar");
        assert_eq!(json["role"], "AXButton");
    }

    #[test]
    fn test_element_descriptor_empty_role_is_kept() {
        let element: ElementDescriptor = serde_json::from_str(r#"{"role": ""}"#).unwrap();
        assert_eq!(element.role, "");
        assert!(element.title.is_none());
        assert!(element.parent_chain.is_empty());
    }
}
