//! Foreground application tracking

pub mod context_tracker;
pub mod ports;

pub use context_tracker::ContextTracker;
