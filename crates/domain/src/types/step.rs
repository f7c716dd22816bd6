//! Accepted, captioned tutorial steps.

use serde::{Deserialize, Serialize};

use super::action::{ActionKind, ElementDescriptor, RawAction};
use crate::constants::{SCREENSHOT_KEY_EXTENSION, SCREENSHOT_KEY_PREFIX};

/// A raw action the detector accepted as a tutorial step.
///
/// Always paired 1:1 with the action that produced it. Field names on the
/// wire are snake_case to match the upload layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedStep {
    /// 0-based, strictly increasing within a session
    pub order_index: usize,
    /// Seconds since session start, copied from the action
    pub timestamp: f64,
    /// Kind of the source action
    pub action_type: ActionKind,
    /// `step-{order_index}.jpg`, the key the screenshot is stored under
    pub screenshot_key: String,
    /// Normalized click x, top-left origin
    pub click_x: Option<f64>,
    /// Normalized click y, top-left origin
    pub click_y: Option<f64>,
    /// Screen width in points
    pub viewport_width: u32,
    /// Screen height in points
    pub viewport_height: u32,
    /// Frontmost app bundle identifier
    pub app_bundle_id: Option<String>,
    /// Frontmost app display name
    pub app_name: Option<String>,
    /// Title of the focused window
    pub window_title: Option<String>,
    /// Page URL, when known
    pub url: Option<String>,
    /// Accessibility element that was clicked
    pub element_info: Option<ElementDescriptor>,
    /// Human-readable caption
    pub auto_caption: String,
}

impl DetectedStep {
    /// Build a step from the action that triggered it.
    #[must_use]
    pub fn from_action(action: &RawAction, order_index: usize, auto_caption: String) -> Self {
        Self {
            order_index,
            timestamp: action.relative_time,
            action_type: action.kind,
            screenshot_key: Self::screenshot_key_for(order_index),
            click_x: action.click_x,
            click_y: action.click_y,
            viewport_width: action.viewport_width,
            viewport_height: action.viewport_height,
            app_bundle_id: action.app_bundle_id.clone(),
            app_name: action.app_name.clone(),
            window_title: action.window_title.clone(),
            url: action.url.clone(),
            element_info: action.element.clone(),
            auto_caption,
        }
    }

    /// Storage key the screenshot for step `order_index` is filed under.
    #[must_use]
    pub fn screenshot_key_for(order_index: usize) -> String {
        format!("{SCREENSHOT_KEY_PREFIX}{order_index}{SCREENSHOT_KEY_EXTENSION}")
    }
}
