//! Capture-side helpers used by event monitors when building `RawAction`s
//!
//! These hold the producer obligations: relative times against a single
//! session start, click coordinates normalized to a top-origin [0, 1] space,
//! shortcut strings only for modifier chords, and app switches only when the
//! frontmost app actually changed.

pub mod app_switch;
pub mod clock;
pub mod keys;
pub mod viewport;

pub use app_switch::AppSwitchFilter;
pub use clock::SessionClock;
pub use keys::{build_key_combo, Modifiers};
pub use viewport::Viewport;
