//! Action buffer - serializes concurrent submissions into the detector
//!
//! Mouse, keyboard and app-activation monitors each deliver actions on their
//! own thread. The buffer holds a single lock for the whole of `submit`, so the
//! order index handed to the detector is exactly the number of steps accepted
//! so far and can never collide.

use parking_lot::Mutex;
use stepcast_domain::{DetectedStep, RawAction};
use tracing::{debug, trace};

use super::detector::StepDetector;

/// Listener invoked with every accepted step.
///
/// Runs while the buffer lock is held: it must not call back into the same
/// buffer, and should hand the step off quickly (e.g. push onto a channel).
pub type StepCallback = Box<dyn Fn(DetectedStep) + Send + Sync>;

struct BufferState {
    detector: StepDetector,
    action_log: Vec<RawAction>,
    step_count: usize,
    on_step: Option<StepCallback>,
}

/// Thread-safe sequencing wrapper around a [`StepDetector`].
pub struct ActionBuffer {
    state: Mutex<BufferState>,
}

impl Default for ActionBuffer {
    fn default() -> Self {
        Self::new(StepDetector::new())
    }
}

impl std::fmt::Debug for ActionBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ActionBuffer")
            .field("step_count", &state.step_count)
            .field("action_log_len", &state.action_log.len())
            .field("has_listener", &state.on_step.is_some())
            .finish()
    }
}

impl ActionBuffer {
    /// Wrap a detector. The buffer owns it for the rest of its life.
    #[must_use]
    pub fn new(detector: StepDetector) -> Self {
        Self {
            state: Mutex::new(BufferState {
                detector,
                action_log: Vec::new(),
                step_count: 0,
                on_step: None,
            }),
        }
    }

    /// Builder form of [`set_on_step`](Self::set_on_step).
    #[must_use]
    pub fn with_on_step(self, callback: StepCallback) -> Self {
        self.set_on_step(callback);
        self
    }

    /// Register (or replace) the step-accepted listener.
    pub fn set_on_step(&self, callback: StepCallback) {
        self.state.lock().on_step = Some(callback);
    }

    /// Remove the step-accepted listener.
    pub fn clear_on_step(&self) {
        self.state.lock().on_step = None;
    }

    /// Log, classify and, if accepted, publish one action.
    ///
    /// Blocks on the lock under contention; never drops an action.
    pub fn submit(&self, action: RawAction) {
        let mut state = self.state.lock();
        let order_index = state.step_count;

        let step = state.detector.classify(&action, order_index);
        state.action_log.push(action);

        let Some(step) = step else {
            trace!(order_index, logged = state.action_log.len(), "Action did not produce a step");
            return;
        };

        state.step_count += 1;
        debug!(order_index, caption = %step.auto_caption, "Step accepted");

        if let Some(callback) = &state.on_step {
            callback(step);
        }
    }

    /// Clear the log and counter and reset the detector. Keeps the listener.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.action_log.clear();
        state.step_count = 0;
        state.detector.reset();
        debug!("Action buffer reset");
    }

    /// Steps accepted so far in this session.
    #[must_use]
    pub fn current_step_count(&self) -> usize {
        self.state.lock().step_count
    }

    /// Number of actions submitted since the last reset, accepted or not.
    #[must_use]
    pub fn action_log_len(&self) -> usize {
        self.state.lock().action_log.len()
    }

    /// Snapshot of the action log in submission order.
    #[must_use]
    pub fn action_log(&self) -> Vec<RawAction> {
        self.state.lock().action_log.clone()
    }
}
