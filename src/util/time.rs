//! Wall-clock timing helpers
//!
//! Thin wrapper over `std::time::Instant` plus formatting used by the
//! reports.

use std::time::{Duration, Instant};

/// Started timer for one measured operation
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start timing now
    #[inline]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since `start()`
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run `f` and return its output together with how long it took
    pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
        let timer = Self::start();
        let out = f();
        (out, timer.elapsed())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

/// Format a duration in human-readable form
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use parmax::util::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
/// assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50us");
/// assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
/// assert_eq!(format_duration(Duration::from_secs(5)), "5.00s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", nanos as f64 / 1_000_000_000.0)
    }
}

/// How many times faster `candidate` ran than `baseline`
///
/// `None` when `candidate` took no measurable time.
pub fn speedup(baseline: Duration, candidate: Duration) -> Option<f64> {
    let candidate = candidate.as_secs_f64();
    if candidate > 0.0 {
        Some(baseline.as_secs_f64() / candidate)
    } else {
        None
    }
}

/// Elements scanned per second
pub fn calculate_rate(elements: usize, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        elements as f64 / seconds
    } else {
        0.0
    }
}

/// Format a rate (elements per second)
///
/// ```
/// use parmax::util::time::format_rate;
///
/// assert_eq!(format_rate(500.0), "500");
/// assert_eq!(format_rate(2_500_000.0), "2.50M");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate < 1_000.0 {
        format!("{:.0}", rate)
    } else if rate < 1_000_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else if rate < 1_000_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else {
        format!("{:.2}G", rate / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_stopwatch_elapsed() {
        let timer = Stopwatch::start();
        thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_stopwatch_measure() {
        let (value, elapsed) = Stopwatch::measure(|| {
            thread::sleep(Duration::from_millis(5));
            7
        });
        assert_eq!(value, 7);
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50us");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(Duration::from_secs(4), Duration::from_secs(2)), Some(2.0));
        assert_eq!(speedup(Duration::from_secs(1), Duration::ZERO), None);
    }

    #[test]
    fn test_calculate_rate() {
        assert_eq!(calculate_rate(1000, Duration::from_secs(10)), 100.0);
        assert_eq!(calculate_rate(1000, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(500.0), "500");
        assert_eq!(format_rate(1500.0), "1.50K");
        assert_eq!(format_rate(1_500_000_000.0), "1.50G");
    }
}
