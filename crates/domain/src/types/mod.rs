//! Domain types and models
//!
//! Raw actions flow in, detected steps flow out; context types describe the
//! foreground application at capture time.

pub mod action;
pub mod context;
pub mod session;
pub mod step;

pub use action::{ActionKind, ElementDescriptor, RawAction};
pub use context::{AppContext, PluginContext};
pub use session::SessionSummary;
pub use step::DetectedStep;
