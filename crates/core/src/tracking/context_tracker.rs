//! Context tracker - cached view of the frontmost application
//!
//! Event monitors read the cached context when building a `RawAction`
//! instead of each querying the OS. The tracker also accumulates every bundle
//! id seen during the session for the session summary.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;
use stepcast_domain::{AppContext, Result};
use tracing::{debug, warn};

use super::ports::ForegroundAppProvider;

#[derive(Debug, Default)]
struct TrackerState {
    current: AppContext,
    apps_used: BTreeSet<String>,
}

/// Lock-protected foreground context cache.
pub struct ContextTracker {
    provider: Arc<dyn ForegroundAppProvider>,
    state: Mutex<TrackerState>,
}

impl ContextTracker {
    /// Create a tracker reading from `provider`. Nothing is queried until the
    /// first [`refresh`](Self::refresh).
    pub fn new(provider: Arc<dyn ForegroundAppProvider>) -> Self {
        Self { provider, state: Mutex::new(TrackerState::default()) }
    }

    /// Re-read the frontmost app and record its bundle id.
    ///
    /// On failure the previously cached context is kept.
    ///
    /// # Errors
    /// Propagates the provider's error after logging it.
    pub fn refresh(&self) -> Result<AppContext> {
        let mut state = self.state.lock();

        let context = match self.provider.frontmost_app() {
            Ok(context) => context,
            Err(err) => {
                warn!(error = %err, "Failed to read frontmost application; keeping cached context");
                return Err(err);
            }
        };

        if let Some(bundle_id) = &context.bundle_id {
            if state.apps_used.insert(bundle_id.clone()) {
                debug!(bundle_id = %bundle_id, "First sighting of application this session");
            }
        }

        state.current = context.clone();
        Ok(context)
    }

    /// Snapshot of the cached context.
    #[must_use]
    pub fn current_context(&self) -> AppContext {
        self.state.lock().current.clone()
    }

    /// Every bundle id seen this session, sorted.
    #[must_use]
    pub fn all_apps_used(&self) -> Vec<String> {
        self.state.lock().apps_used.iter().cloned().collect()
    }

    /// Forget the cached context and the app set.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.current = AppContext::empty();
        state.apps_used.clear();
    }
}

impl std::fmt::Debug for ContextTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextTracker").field("state", &*self.state.lock()).finish()
    }
}
