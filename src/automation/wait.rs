// Fri Oct 16 2026 - Alex

use std::thread;
use std::time::{Duration, Instant};

/// Polls `condition` every `interval` until it holds or `timeout` elapses.
/// Sleeps between checks and never overshoots the deadline by more than one
/// condition evaluation.
pub fn wait_until<F>(timeout: Duration, interval: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep(interval.min(deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_immediately_when_satisfied() {
        let start = Instant::now();
        assert!(wait_until(Duration::from_secs(5), Duration::from_millis(200), || true));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_times_out() {
        let start = Instant::now();
        assert!(!wait_until(Duration::from_millis(50), Duration::from_millis(10), || false));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_polls_until_condition() {
        let mut calls = 0;
        let ok = wait_until(Duration::from_secs(1), Duration::from_millis(1), || {
            calls += 1;
            calls >= 3
        });
        assert!(ok);
        assert_eq!(calls, 3);
    }
}
