//! Human-readable captions for detected steps
//!
//! Captions are a pure function of the action: no detector state, no clock.
//! Optional fields each have a defined fallback so a partially-populated
//! action never fails to caption.

use std::collections::HashMap;

use lazy_static::lazy_static;
use stepcast_domain::constants::{ACCESSIBILITY_ROLE_PREFIX, TYPED_TEXT_PREVIEW_LENGTH};
use stepcast_domain::utils::truncate_preview;
use stepcast_domain::{ActionKind, RawAction};

lazy_static! {
    /// Accessibility role -> phrase used inside captions
    static ref FRIENDLY_ROLES: HashMap<&'static str, &'static str> = HashMap::from([
        ("AXButton", "button"),
        ("AXLink", "link"),
        ("AXMenuItem", "menu item"),
        ("AXMenuBarItem", "menu bar item"),
        ("AXCheckBox", "checkbox"),
        ("AXRadioButton", "radio button"),
        ("AXPopUpButton", "dropdown"),
        ("AXComboBox", "combo box"),
        ("AXTextField", "text field"),
        ("AXTextArea", "text area"),
        ("AXTab", "tab"),
        ("AXToolbar", "toolbar"),
        ("AXImage", "image"),
        ("AXStaticText", "text"),
        ("AXGroup", "area"),
        ("AXScrollArea", "scroll area"),
        ("AXTable", "table"),
        ("AXRow", "row"),
        ("AXCell", "cell"),
        ("AXDisclosureTriangle", "disclosure triangle"),
    ]);

    /// Key combo -> what the shortcut does in virtually every macOS app
    static ref KNOWN_SHORTCUTS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Cmd+C", "Copy"),
        ("Cmd+V", "Paste"),
        ("Cmd+X", "Cut"),
        ("Cmd+Z", "Undo"),
        ("Cmd+Shift+Z", "Redo"),
        ("Cmd+S", "Save"),
        ("Cmd+A", "Select All"),
        ("Cmd+F", "Find"),
        ("Cmd+N", "New"),
        ("Cmd+O", "Open"),
        ("Cmd+W", "Close Window"),
        ("Cmd+Q", "Quit"),
        ("Cmd+T", "New Tab"),
        ("Cmd+P", "Print"),
        ("Cmd+Shift+S", "Save As"),
        ("Cmd+Tab", "Switch App"),
    ]);
}

/// Generate the auto-caption for an action.
#[must_use]
pub fn generate_caption(action: &RawAction) -> String {
    match action.kind {
        ActionKind::Click => click_caption(action),
        ActionKind::KeyboardShortcut => shortcut_caption(action),
        ActionKind::AppSwitch => match &action.app_name {
            Some(app) => format!("Switch to {app}"),
            None => "Switch application".to_string(),
        },
        ActionKind::Type => type_caption(action),
        ActionKind::ManualMarker => "Manual step marker".to_string(),
        ActionKind::MenuSelection => match element_title(action) {
            Some(title) => format!("Select '{title}' from menu"),
            None => "Select menu item".to_string(),
        },
        ActionKind::UrlNavigation => match &action.url {
            Some(url) => format!("Navigate to {url}"),
            None => "Navigate to URL".to_string(),
        },
        ActionKind::DialogInteraction => match element_title(action) {
            Some(title) => format!("Interact with '{title}' dialog"),
            None => "Interact with dialog".to_string(),
        },
        // Never accepted at the default threshold; kept so the caption
        // function stays total.
        ActionKind::Scroll => "Scroll".to_string(),
        ActionKind::Drag => "Drag action".to_string(),
        ActionKind::Unknown => "Action performed".to_string(),
    }
}

/// Map an accessibility role to the phrase used in captions.
///
/// Unmapped roles drop the `AX` prefix and are lower-cased.
///
/// # Examples
///
/// ```
/// use stepcast_core::detection::caption::friendly_role_name;
///
/// assert_eq!(friendly_role_name("AXPopUpButton"), "dropdown");
/// assert_eq!(friendly_role_name("AXSlider"), "slider");
/// ```
#[must_use]
pub fn friendly_role_name(role: &str) -> String {
    match FRIENDLY_ROLES.get(role) {
        Some(name) => (*name).to_string(),
        None => role.replace(ACCESSIBILITY_ROLE_PREFIX, "").to_lowercase(),
    }
}

/// Describe a well-known shortcut, if `combo` is one.
#[must_use]
pub fn known_shortcut_description(combo: &str) -> Option<&'static str> {
    KNOWN_SHORTCUTS.get(combo).copied()
}

fn element_title(action: &RawAction) -> Option<&str> {
    action.element.as_ref().and_then(|element| element.title.as_deref())
}

fn click_caption(action: &RawAction) -> String {
    let Some(element) = &action.element else {
        return match &action.app_name {
            Some(app) => format!("Click in {app}"),
            None => "Click".to_string(),
        };
    };

    let element_type = friendly_role_name(&element.role);

    if let Some(title) = element.title.as_deref().filter(|title| !title.is_empty()) {
        return format!("Click the '{title}' {element_type}");
    }

    match &action.app_name {
        Some(app) => format!("Click {element_type} in {app}"),
        None => format!("Click {element_type}"),
    }
}

fn shortcut_caption(action: &RawAction) -> String {
    let Some(combo) = &action.key_combo else {
        return "Keyboard shortcut".to_string();
    };

    if let Some(description) = known_shortcut_description(combo) {
        return format!("{description} ({combo})");
    }

    match &action.app_name {
        Some(app) => format!("Press {combo} in {app}"),
        None => format!("Press {combo}"),
    }
}

fn type_caption(action: &RawAction) -> String {
    match action.typed_text.as_deref().filter(|text| !text.is_empty()) {
        Some(text) => format!("Type '{}'", truncate_preview(text, TYPED_TEXT_PREVIEW_LENGTH)),
        None => "Type text".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use stepcast_domain::ElementDescriptor;

    use super::*;

    fn click() -> RawAction {
        RawAction::new(1.0, ActionKind::Click)
    }

    #[test]
    fn test_click_with_titled_button() {
        let action = click()
            .with_app_name("Safari")
            .with_element(ElementDescriptor::new("AXButton").with_title("Submit"));
        assert_eq!(generate_caption(&action), "Click the 'Submit' button");
    }

    #[test]
    fn test_click_without_element() {
        assert_eq!(generate_caption(&click().with_app_name("Finder")), "Click in Finder");
        assert_eq!(generate_caption(&click()), "Click");
    }

    #[test]
    fn test_click_with_empty_title_falls_back_to_app() {
        let action = click()
            .with_app_name("Notes")
            .with_element(ElementDescriptor::new("AXCheckBox").with_title(""));
        assert_eq!(generate_caption(&action), "Click checkbox in Notes");
    }

    #[test]
    fn test_click_untitled_without_app() {
        let action = click().with_element(ElementDescriptor::new("AXPopUpButton"));
        assert_eq!(generate_caption(&action), "Click dropdown");
    }

    #[test]
    fn test_click_on_unmapped_role() {
        let action = click().with_element(ElementDescriptor::new("AXSplitter"));
        assert_eq!(generate_caption(&action), "Click splitter");
    }

    #[test]
    fn test_click_on_empty_role() {
        let action = click().with_element(ElementDescriptor::new(""));
        assert_eq!(generate_caption(&action), "Click ");
    }

    #[test]
    fn test_known_shortcut() {
        let action = RawAction::new(2.0, ActionKind::KeyboardShortcut)
            .with_app_name("Visual Studio Code")
            .with_key_combo("Cmd+S");
        assert_eq!(generate_caption(&action), "Save (Cmd+S)");
    }

    #[test]
    fn test_every_known_shortcut_is_described() {
        for (combo, description) in KNOWN_SHORTCUTS.iter() {
            let action = RawAction::new(0.0, ActionKind::KeyboardShortcut).with_key_combo(*combo);
            assert_eq!(generate_caption(&action), format!("{description} ({combo})"));
        }
    }

    #[test]
    fn test_unknown_shortcut() {
        let base = RawAction::new(0.0, ActionKind::KeyboardShortcut).with_key_combo("Cmd+Opt+I");
        assert_eq!(generate_caption(&base), "Press Cmd+Opt+I");
        assert_eq!(generate_caption(&base.with_app_name("Safari")), "Press Cmd+Opt+I in Safari");
    }

    #[test]
    fn test_shortcut_without_combo() {
        let action = RawAction::new(0.0, ActionKind::KeyboardShortcut).with_app_name("Safari");
        assert_eq!(generate_caption(&action), "Keyboard shortcut");
    }

    #[test]
    fn test_app_switch() {
        let action = RawAction::new(0.0, ActionKind::AppSwitch).with_app_name("Google Chrome");
        assert_eq!(generate_caption(&action), "Switch to Google Chrome");
        assert_eq!(
            generate_caption(&RawAction::new(0.0, ActionKind::AppSwitch)),
            "Switch application"
        );
    }

    #[test]
    fn test_type_preview_truncation() {
        let short = RawAction::new(0.0, ActionKind::Type).with_typed_text("hello world");
        assert_eq!(generate_caption(&short), "Type 'hello world'");

        let long = RawAction::new(0.0, ActionKind::Type)
            .with_typed_text("The quick brown fox jumps over the lazy dog");
        assert_eq!(generate_caption(&long), "Type 'The quick brown fox jumps over...'");
    }

    #[test]
    fn test_type_without_text() {
        assert_eq!(generate_caption(&RawAction::new(0.0, ActionKind::Type)), "Type text");
        let empty = RawAction::new(0.0, ActionKind::Type).with_typed_text("");
        assert_eq!(generate_caption(&empty), "Type text");
    }

    #[test]
    fn test_menu_selection() {
        let titled = RawAction::new(0.0, ActionKind::MenuSelection)
            .with_element(ElementDescriptor::new("AXMenuItem").with_title("Export…"));
        assert_eq!(generate_caption(&titled), "Select 'Export…' from menu");
        assert_eq!(
            generate_caption(&RawAction::new(0.0, ActionKind::MenuSelection)),
            "Select menu item"
        );
    }

    #[test]
    fn test_url_navigation() {
        let action = RawAction::new(0.0, ActionKind::UrlNavigation).with_url("https://example.com");
        assert_eq!(generate_caption(&action), "Navigate to https://example.com");
        assert_eq!(
            generate_caption(&RawAction::new(0.0, ActionKind::UrlNavigation)),
            "Navigate to URL"
        );
    }

    #[test]
    fn test_dialog_interaction() {
        let action = RawAction::new(0.0, ActionKind::DialogInteraction)
            .with_element(ElementDescriptor::new("AXSheet").with_title("Save"));
        assert_eq!(generate_caption(&action), "Interact with 'Save' dialog");
        let untitled = RawAction::new(0.0, ActionKind::DialogInteraction)
            .with_element(ElementDescriptor::new("AXSheet"));
        assert_eq!(generate_caption(&untitled), "Interact with dialog");
    }

    #[test]
    fn test_fixed_captions() {
        assert_eq!(generate_caption(&RawAction::new(0.0, ActionKind::ManualMarker)), "Manual step marker");
        assert_eq!(generate_caption(&RawAction::new(0.0, ActionKind::Scroll)), "Scroll");
        assert_eq!(generate_caption(&RawAction::new(0.0, ActionKind::Drag)), "Drag action");
        assert_eq!(generate_caption(&RawAction::new(0.0, ActionKind::Unknown)), "Action performed");
    }

    #[test]
    fn test_friendly_role_names() {
        assert_eq!(friendly_role_name("AXGroup"), "area");
        assert_eq!(friendly_role_name("AXStaticText"), "text");
        assert_eq!(friendly_role_name("AXDisclosureTriangle"), "disclosure triangle");
        assert_eq!(friendly_role_name("AXOutline"), "outline");
        assert_eq!(friendly_role_name("Slider"), "slider");
    }
}
