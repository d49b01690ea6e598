use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Returns the current time in nanoseconds since UNIX epoch
pub fn current_time_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos() as u64
}

/// Monotonic timer for latency measurement on the book's hot paths.
#[derive(Debug)]
pub(crate) struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub(crate) fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Nanoseconds elapsed since the timer was started.
    pub(crate) fn elapsed_ns(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}
