//! Rate limiting for per-chunk progress events.

use std::time::{Duration, Instant};

/// Default spacing between two progress events for one artifact.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Decides when a transfer may report progress again.
///
/// The first check always passes so every artifact reports at least once.
#[derive(Debug, Clone)]
pub struct ProgressThrottle {
    interval: Duration,
    last_report: Option<Instant>,
}

impl ProgressThrottle {
    /// Throttle with a custom spacing.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_report: None,
        }
    }

    /// Returns `true` (and starts a new interval) if a report is due.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    fn ready_at(&mut self, now: Instant) -> bool {
        let due = self
            .last_report
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.last_report = Some(now);
        }
        due
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_INTERVAL)
    }
}
