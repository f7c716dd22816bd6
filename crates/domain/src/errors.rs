//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Stepcast
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum StepcastError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// An OS query (NSWorkspace, event taps) failed or is unsupported
    #[error("Platform error: {0}")]
    Platform(String),

    /// The accessibility layer refused or failed a query
    #[error("Accessibility error: {0}")]
    Accessibility(String),

    /// Caller supplied a value outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Stepcast operations
pub type Result<T> = std::result::Result<T, StepcastError>;
