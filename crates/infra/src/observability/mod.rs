//! Observability infrastructure
//!
//! Structured logging via `tracing`. Library code only emits events; the
//! binary that embeds the recorder calls [`init_logging`] once at startup
//! and holds the returned guard.

pub mod logging;

pub use logging::{build_filter, init_logging, LoggingGuard};
