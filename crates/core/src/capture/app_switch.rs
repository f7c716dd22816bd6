//! App-activation de-duplication

/// Lets an app activation through only when the frontmost bundle id changed.
///
/// Re-activating the app that is already frontmost (clicking its Dock icon,
/// closing a panel) is not an app switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSwitchFilter {
    last_bundle_id: Option<String>,
}

impl AppSwitchFilter {
    /// Seed with the app that is frontmost when the session starts.
    #[must_use]
    pub fn new(initial_bundle_id: Option<String>) -> Self {
        Self { last_bundle_id: initial_bundle_id }
    }

    /// Record an activation; `true` if it is a real switch.
    pub fn observe(&mut self, bundle_id: Option<&str>) -> bool {
        if self.last_bundle_id.as_deref() == bundle_id {
            return false;
        }
        self.last_bundle_id = bundle_id.map(str::to_string);
        true
    }

    /// Bundle id of the last accepted activation.
    #[must_use]
    pub fn last_bundle_id(&self) -> Option<&str> {
        self.last_bundle_id.as_deref()
    }
}
