//! Per-session metadata handed to the upload layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of one finished recording session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Seconds from start to finish
    pub duration: f64,
    /// `"{width}x{height}"` of the capture viewport
    pub screen_resolution: String,
    /// Sorted bundle identifiers seen during the session
    pub apps_used: Vec<String>,
    pub step_count: usize,
}

impl SessionSummary {
    /// Format a viewport as the resolution string used in summaries.
    #[must_use]
    pub fn resolution_string(width: u32, height: u32) -> String {
        format!("{width}x{height}")
    }
}
