//! Step detector - decides whether a raw action is a tutorial step
//!
//! # Algorithm
//! 1. Score the action ([`confidence`]); reject below the threshold
//! 2. Reject if it arrives less than the debounce interval after the last
//!    *accepted* step (rejected actions never move the window)
//! 3. Accept: remember its time, caption it, build the [`DetectedStep`]
//!
//! The detector is not synchronized. It is owned by an
//! [`ActionBuffer`](super::ActionBuffer), which serializes every call.

use stepcast_domain::{DetectedStep, DetectionConfig, RawAction};
use tracing::{debug, trace};

use super::caption::generate_caption;
use super::confidence::confidence;

/// Why an action was not turned into a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// Score below the confidence threshold
    LowConfidence(f64),
    /// Too soon after the last accepted step; carries the gap in seconds
    Debounced(f64),
}

/// Per-session step detector.
///
/// Construct one per recording session (or [`reset`](Self::reset) between
/// sessions); it holds no other session-scoped state than the time of the
/// last accepted step.
#[derive(Debug, Clone)]
pub struct StepDetector {
    config: DetectionConfig,
    last_accepted_time: Option<f64>,
}

impl Default for StepDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl StepDetector {
    /// Detector with the shipped threshold (0.3) and debounce window (0.5s).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DetectionConfig::default())
    }

    /// Detector with custom tuning.
    #[must_use]
    pub fn with_config(config: DetectionConfig) -> Self {
        Self { config, last_accepted_time: None }
    }

    /// Active tuning.
    #[must_use]
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Relative time of the last accepted step, if any.
    #[must_use]
    pub fn last_accepted_time(&self) -> Option<f64> {
        self.last_accepted_time
    }

    /// Classify one action as step `order_index`.
    ///
    /// Returns `None` when the action is noise or debounced; that is a normal
    /// outcome, not an error.
    pub fn classify(&mut self, action: &RawAction, order_index: usize) -> Option<DetectedStep> {
        match self.evaluate(action) {
            Ok(()) => {
                self.last_accepted_time = Some(action.relative_time);
                let caption = generate_caption(action);
                trace!(
                    order_index,
                    kind = %action.kind,
                    relative_time = action.relative_time,
                    caption = %caption,
                    "Accepted step"
                );
                Some(DetectedStep::from_action(action, order_index, caption))
            }
            Err(rejection) => {
                debug!(
                    kind = %action.kind,
                    relative_time = action.relative_time,
                    reason = ?rejection,
                    "Rejected action"
                );
                None
            }
        }
    }

    /// Apply the threshold and debounce checks without mutating state.
    ///
    /// # Errors
    /// Returns the [`Rejection`] reason when the action would not be accepted.
    pub fn evaluate(&self, action: &RawAction) -> Result<(), Rejection> {
        let score = confidence(action);
        if score < self.config.confidence_threshold {
            return Err(Rejection::LowConfidence(score));
        }

        if let Some(last) = self.last_accepted_time {
            let gap = action.relative_time - last;
            if gap < self.config.min_step_interval_secs {
                return Err(Rejection::Debounced(gap));
            }
        }

        Ok(())
    }

    /// Forget the last accepted step. Call at the start of a new session.
    pub fn reset(&mut self) {
        self.last_accepted_time = None;
    }
}

#[cfg(test)]
mod tests {
    use stepcast_domain::{ActionKind, ElementDescriptor};

    use super::*;

    fn button_click(at: f64, title: &str) -> RawAction {
        RawAction::new(at, ActionKind::Click)
            .with_click(0.5, 0.3)
            .with_element(ElementDescriptor::new("AXButton").with_title(title))
    }

    #[test]
    fn test_click_with_button_element_generates_step() {
        let mut detector = StepDetector::new();
        let action = RawAction::new(1.0, ActionKind::Click)
            .with_click(0.5, 0.3)
            .with_viewport(2560, 1600)
            .with_bundle_id("com.apple.Safari")
            .with_app_name("Safari")
            .with_window_title("GitHub")
            .with_element(
                ElementDescriptor::new("AXButton")
                    .with_title("Submit")
                    .with_parent_chain(["AXToolbar", "AXWindow"]),
            );

        let step = detector.classify(&action, 0).unwrap();
        assert_eq!(step.order_index, 0);
        assert_eq!(step.action_type, ActionKind::Click);
        assert_eq!(step.screenshot_key, "step-0.jpg");
        assert_eq!(step.auto_caption, "Click the 'Submit' button");
    }

    #[test]
    fn test_scroll_is_filtered_out() {
        let mut detector = StepDetector::new();
        let scroll = RawAction::new(3.0, ActionKind::Scroll);
        assert!(detector.classify(&scroll, 0).is_none());
        assert_eq!(detector.evaluate(&scroll), Err(Rejection::LowConfidence(0.1)));
    }

    #[test]
    fn test_unknown_is_filtered_out() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&RawAction::new(3.0, ActionKind::Unknown), 0).is_none());
    }

    #[test]
    fn test_debounce_filters_rapid_actions() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&button_click(1.0, "OK"), 0).is_some());
        assert!(detector.classify(&button_click(1.2, "Cancel"), 1).is_none());
    }

    #[test]
    fn test_debounce_boundary_is_inclusive() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&button_click(1.0, "OK"), 0).is_some());
        assert!(detector.classify(&button_click(1.5, "Next"), 1).is_some());
    }

    #[test]
    fn test_rejected_actions_do_not_extend_window() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&button_click(1.0, "A"), 0).is_some());
        // Debounced at 1.3, must not move the window to 1.3
        assert!(detector.classify(&button_click(1.3, "B"), 1).is_none());
        assert!(detector.classify(&button_click(1.6, "C"), 1).is_some());
        assert_eq!(detector.last_accepted_time(), Some(1.6));
    }

    #[test]
    fn test_low_confidence_does_not_touch_window() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&RawAction::new(1.0, ActionKind::Scroll), 0).is_none());
        assert_eq!(detector.last_accepted_time(), None);
        assert!(detector.classify(&button_click(1.1, "OK"), 0).is_some());
    }

    #[test]
    fn test_manual_marker_is_still_debounced() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&button_click(10.0, "OK"), 0).is_some());
        let marker = RawAction::new(10.2, ActionKind::ManualMarker);
        assert!(matches!(detector.evaluate(&marker), Err(Rejection::Debounced(_))));
        assert!(detector.classify(&marker, 1).is_none());
    }

    #[test]
    fn test_manual_marker_generates_step() {
        let mut detector = StepDetector::new();
        let step = detector.classify(&RawAction::new(10.0, ActionKind::ManualMarker), 0).unwrap();
        assert_eq!(step.auto_caption, "Manual step marker");
    }

    #[test]
    fn test_reset_clears_state() {
        let mut detector = StepDetector::new();
        assert!(detector.classify(&button_click(1.0, "OK"), 0).is_some());
        detector.reset();
        assert_eq!(detector.last_accepted_time(), None);
        assert!(detector.classify(&button_click(0.0, "OK"), 0).is_some());
    }

    #[test]
    fn test_custom_threshold() {
        let config = DetectionConfig { confidence_threshold: 0.05, ..DetectionConfig::default() };
        let mut detector = StepDetector::with_config(config);
        let step = detector.classify(&RawAction::new(0.0, ActionKind::Scroll), 0).unwrap();
        assert_eq!(step.auto_caption, "Scroll");
    }

    #[test]
    fn test_order_index_drives_screenshot_key() {
        let mut detector = StepDetector::new();
        let step = detector.classify(&button_click(2.0, "OK"), 7).unwrap();
        assert_eq!(step.order_index, 7);
        assert_eq!(step.screenshot_key, "step-7.jpg");
        assert_eq!(step.timestamp, 2.0);
    }
}
