//! Session clock

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Start of a recording session, captured once.
///
/// Relative times come from a monotonic [`Instant`], so they never go
/// backwards even if the wall clock is adjusted mid-session.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

impl SessionClock {
    /// Start the clock now.
    #[must_use]
    pub fn start() -> Self {
        Self { started: Instant::now(), started_at: Utc::now() }
    }

    /// Wall-clock time the session started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Seconds since the session started, non-negative.
    #[must_use]
    pub fn relative_time(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
