//! Lightweight wall-clock timing for run reports.
//!
//! Printing is opt-in via `enable_timing()` or the `DS_TIMING` environment
//! variable. The measured value is always returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable timing output globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing output is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("DS_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Seconds since the timer was started.
    pub fn elapsed_s(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer, print the result if enabled, and return elapsed seconds.
    pub fn stop(self) -> f64 {
        let elapsed = self.elapsed_s();
        if is_enabled() {
            println!("[TIMING] {}: {:.3}s", self.label, elapsed);
        }
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_is_monotonic() {
        let timer = Timer::start("test");
        let first = timer.elapsed_s();
        let second = timer.elapsed_s();
        assert!(first >= 0.0);
        assert!(second >= first);
        assert_eq!(timer.label(), "test");
        assert!(timer.stop() >= second);
    }
}
