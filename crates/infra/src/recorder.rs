//! Recording session composition root
//!
//! Wires one [`ContextTracker`], one [`ActionBuffer`] and the plugin set
//! for a session and turns OS-level signals into [`RawAction`]s:
//!
//! ```text
//! click / shortcut / activation / marker
//!        │  (session clock, viewport, cached context)
//!        ▼
//!   Recorder::submit ──► plugin URL enrichment ──► ActionBuffer
//!                                                      │ accepted
//!                                                      ▼
//!                                             StepStream (mpsc)
//! ```
//!
//! Accepted steps leave through an unbounded channel so the buffer lock is
//! never held across an await or a slow consumer.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use stepcast_core::{
    build_key_combo, ActionBuffer, AppSwitchFilter, ContextTracker, ForegroundAppProvider,
    Modifiers, PluginRegistry, SessionClock, StepDetector, Viewport,
};
use stepcast_domain::{
    ActionKind, AppContext, Config, DetectedStep, ElementDescriptor, RawAction, Result as DomainResult,
    SessionSummary,
};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::cache::PluginContextCache;
use crate::platform::{self, AppActivationListener};

/// Accepted steps, in order index order.
pub type StepStream = mpsc::UnboundedReceiver<DetectedStep>;

#[derive(Debug)]
struct Session {
    id: Uuid,
    clock: SessionClock,
    switch_filter: AppSwitchFilter,
}

impl Session {
    fn begin(initial_bundle_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            clock: SessionClock::start(),
            switch_filter: AppSwitchFilter::new(initial_bundle_id),
        }
    }
}

/// One recorder per process; sessions are started and finished on it.
pub struct Recorder {
    tracker: ContextTracker,
    buffer: ActionBuffer,
    plugins: PluginRegistry,
    plugin_cache: PluginContextCache,
    viewport: Viewport,
    session: Mutex<Session>,
}

impl Recorder {
    /// Build a recorder and the stream its accepted steps are sent to.
    ///
    /// The viewport is read from the primary display once, falling back to
    /// the configured default size.
    #[must_use]
    pub fn new(
        provider: Arc<dyn ForegroundAppProvider>,
        plugins: PluginRegistry,
        config: &Config,
    ) -> (Self, StepStream) {
        let (tx, rx) = mpsc::unbounded_channel();

        let buffer = ActionBuffer::new(StepDetector::with_config(config.detection.clone()))
            .with_on_step(Box::new(move |step: DetectedStep| {
                if tx.send(step).is_err() {
                    tracing::trace!("Step stream receiver dropped; step discarded");
                }
            }));

        let recorder = Self {
            tracker: ContextTracker::new(provider),
            buffer,
            plugins,
            plugin_cache: PluginContextCache::new(Duration::from_secs(
                config.capture.plugin_cache_ttl_secs,
            )),
            viewport: platform::primary_viewport(&config.capture),
            session: Mutex::new(Session::begin(None)),
        };
        (recorder, rx)
    }

    /// Override the screen frame (tests, external displays).
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Reset all session state and start the clock.
    ///
    /// The session lock is held throughout, so no producer can submit
    /// between the buffer reset and the clock swap. A failed context refresh
    /// is tolerated; actions then carry no app.
    pub fn start_session(&self) -> Uuid {
        let mut session = self.session.lock();
        *session = Session::begin(None);

        self.buffer.reset();
        self.tracker.reset();
        self.plugin_cache.clear();

        let initial = self.tracker.refresh().ok().and_then(|context| context.bundle_id);
        session.switch_filter = AppSwitchFilter::new(initial);

        tracing::info!(
            session_id = %session.id,
            started_at = %session.clock.started_at(),
            viewport = %SessionSummary::resolution_string(self.viewport.width, self.viewport.height),
            "Recording session started"
        );
        session.id
    }

    /// Current session id.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session.lock().id
    }

    /// Seconds since the session started.
    #[must_use]
    pub fn relative_time(&self) -> f64 {
        self.session.lock().clock.relative_time()
    }

    /// Screen frame used for click normalisation.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Cached foreground context.
    #[must_use]
    pub fn current_context(&self) -> AppContext {
        self.tracker.current_context()
    }

    /// Re-read the foreground app.
    ///
    /// # Errors
    /// Propagates the platform error; the cached context is kept.
    pub fn refresh_context(&self) -> DomainResult<AppContext> {
        self.tracker.refresh()
    }

    /// Steps accepted so far this session.
    #[must_use]
    pub fn current_step_count(&self) -> usize {
        self.buffer.current_step_count()
    }

    /// Fresh action stamped with session time, viewport and cached context,
    /// paired with the id of the session whose clock stamped it.
    fn new_action(&self, kind: ActionKind) -> (Uuid, RawAction) {
        let (session_id, relative_time) = {
            let session = self.session.lock();
            (session.id, session.clock.relative_time())
        };
        let context = self.tracker.current_context();

        let mut action = RawAction::new(relative_time, kind)
            .with_viewport(self.viewport.width, self.viewport.height)
            .with_app(context.bundle_id, context.app_name);
        action.window_title = context.window_title;
        (session_id, action)
    }

    /// Fill a missing URL from plugin output.
    ///
    /// Plugins never decide whether the action becomes a step.
    fn enrich(&self, action: &mut RawAction) {
        if action.url.is_some() {
            return;
        }
        if let Some(bundle_id) = action.app_bundle_id.as_deref() {
            action.url = self
                .plugin_cache
                .get_or_extract(&self.plugins, bundle_id, action.window_title.as_deref())
                .and_then(|context| context.url);
        }
    }

    /// Enrich and forward an action to the current session's pipeline.
    ///
    /// The caller stamps `relative_time` from [`relative_time`](Self::relative_time).
    pub fn submit(&self, mut action: RawAction) {
        self.enrich(&mut action);
        let _session = self.session.lock();
        self.buffer.submit(action);
    }

    /// Enrich and forward an action stamped by session `session_id`.
    ///
    /// Returns `false` and drops the action when another session has
    /// started since it was stamped.
    pub fn submit_for_session(&self, session_id: Uuid, mut action: RawAction) -> bool {
        self.enrich(&mut action);
        let session = self.session.lock();
        if session.id != session_id {
            tracing::debug!(
                stale_session = %session_id,
                current_session = %session.id,
                action_type = %action.kind,
                "Action from a previous session dropped"
            );
            return false;
        }
        self.buffer.submit(action);
        true
    }

    /// Screen point to hit-test for a click, top-left origin.
    #[must_use]
    pub fn click_lookup_point(&self, raw_x: f64, raw_y_from_bottom: f64) -> (f64, f64) {
        self.viewport.top_origin_point(raw_x, raw_y_from_bottom)
    }

    /// Record a mouse click delivered in bottom-origin screen points.
    pub fn record_click(
        &self,
        raw_x: f64,
        raw_y_from_bottom: f64,
        element: Option<ElementDescriptor>,
    ) {
        let (x, y) = self.viewport.normalize_click(raw_x, raw_y_from_bottom);
        let (session_id, action) = self.new_action(ActionKind::Click);
        let mut action = action.with_click(x, y);
        action.element = element;
        self.submit_for_session(session_id, action);
    }

    /// Record a key press; only modifier chords become actions.
    ///
    /// Returns `false` when the press was plain typing.
    pub fn record_shortcut(&self, modifiers: Modifiers, chars: Option<&str>) -> bool {
        let Some(combo) = build_key_combo(modifiers, chars) else {
            return false;
        };
        let (session_id, action) = self.new_action(ActionKind::KeyboardShortcut);
        self.submit_for_session(session_id, action.with_key_combo(combo));
        true
    }

    /// Record an application activation.
    ///
    /// Re-activating the current app is ignored; returns whether an
    /// `appSwitch` action was submitted.
    pub fn record_app_activation(&self, bundle_id: Option<String>, app_name: Option<String>) -> bool {
        let (session_id, relative_time) = {
            let mut session = self.session.lock();
            if !session.switch_filter.observe(bundle_id.as_deref()) {
                tracing::trace!(bundle_id = ?bundle_id, "Re-activation of frontmost app ignored");
                return false;
            }
            (session.id, session.clock.relative_time())
        };

        // Refresh so later actions carry the new app and it lands in apps_used
        let window_title = self.tracker.refresh().ok().and_then(|context| context.window_title);

        let mut action = RawAction::new(relative_time, ActionKind::AppSwitch)
            .with_viewport(self.viewport.width, self.viewport.height)
            .with_app(bundle_id, app_name);
        action.window_title = window_title;
        self.submit_for_session(session_id, action)
    }

    /// Record a user-requested step marker.
    pub fn mark_step(&self) {
        let (session_id, action) = self.new_action(ActionKind::ManualMarker);
        self.submit_for_session(session_id, action);
    }

    /// Route an OS activation listener into this recorder.
    ///
    /// The listener holds only a weak reference; dropping the recorder
    /// silences it.
    ///
    /// # Errors
    /// Propagates the listener's start error.
    pub fn attach_activation_listener(
        self: &Arc<Self>,
        listener: &mut dyn AppActivationListener,
    ) -> DomainResult<()> {
        let recorder: Weak<Self> = Arc::downgrade(self);
        listener.start(Box::new(move |context: AppContext| {
            if let Some(recorder) = recorder.upgrade() {
                recorder.record_app_activation(context.bundle_id, context.app_name);
            }
        }))
    }

    /// Summarise the session.
    ///
    /// The recorder keeps its state until the next
    /// [`start_session`](Self::start_session).
    #[must_use]
    pub fn finish(&self) -> SessionSummary {
        let (id, started_at, duration) = {
            let session = self.session.lock();
            (session.id, session.clock.started_at(), session.clock.relative_time())
        };

        let summary = SessionSummary {
            id,
            started_at,
            duration,
            screen_resolution: SessionSummary::resolution_string(
                self.viewport.width,
                self.viewport.height,
            ),
            apps_used: self.tracker.all_apps_used(),
            step_count: self.buffer.current_step_count(),
        };

        tracing::info!(
            session_id = %summary.id,
            duration = summary.duration,
            step_count = summary.step_count,
            apps = summary.apps_used.len(),
            "Recording session finished"
        );
        summary
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("session", &*self.session.lock())
            .field("viewport", &self.viewport)
            .field("buffer", &self.buffer)
            .field("plugins", &self.plugins)
            .finish_non_exhaustive()
    }
}
