//! Elapsed-time logging.
//!
//! Invariants:
//! - A `Timer` reports exactly once: on `finish()` or, failing that, on drop.
//! - Reports are `info` events carrying `label` and `elapsed_ms` fields.

use std::time::{Duration, Instant};

/// Run `f` and log how long it took under `label`.
///
/// ```
/// let sum = devkit_utils::timed("sum", || (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// ```
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let timer = Timer::start(label);
    let value = f();
    timer.finish();
    value
}

/// A stopwatch that logs its elapsed time once.
#[derive(Debug)]
pub struct Timer {
    label: String,
    started: Instant,
    reported: bool,
}

impl Timer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
            reported: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the timer, log the elapsed time and return it.
    pub fn finish(mut self) -> Duration {
        let elapsed = self.elapsed();
        self.report(elapsed);
        elapsed
    }

    fn report(&mut self, elapsed: Duration) {
        self.reported = true;
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        tracing::info!(
            label = %self.label,
            elapsed_ms,
            "{} took {:.3} ms",
            self.label,
            elapsed_ms
        );
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.reported {
            let elapsed = self.elapsed();
            self.report(elapsed);
        }
    }
}
