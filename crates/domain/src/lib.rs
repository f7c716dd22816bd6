//! # Stepcast Domain
//!
//! Business domain types and models for Stepcast.
//!
//! This crate contains:
//! - Domain data types (RawAction, DetectedStep, AppContext, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and string utilities
//!
//! ## Architecture
//! - No dependencies on other Stepcast crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
