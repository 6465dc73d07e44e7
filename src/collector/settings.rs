// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning of the scroll loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorSettings {
    /// Consecutive no-growth iterations that end the run.
    pub stabilization_threshold: usize,
    /// Hard bound on iterations regardless of growth.
    pub max_iterations: usize,
    pub checkpoint_interval: usize,
    pub poll_timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub initial_load_timeout_ms: u64,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            stabilization_threshold: 10,
            max_iterations: 500,
            checkpoint_interval: 15,
            poll_timeout_ms: 5_000,
            poll_interval_ms: 200,
            initial_load_timeout_ms: 15_000,
        }
    }
}

impl CollectorSettings {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn initial_load_timeout(&self) -> Duration {
        Duration::from_millis(self.initial_load_timeout_ms)
    }

    /// Upper bound on time spent waiting for growth over a whole run.
    pub fn worst_case_wait(&self) -> Duration {
        let polling = self.poll_timeout_ms.saturating_mul(self.max_iterations as u64);
        Duration::from_millis(self.initial_load_timeout_ms.saturating_add(polling))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stabilization_threshold == 0 {
            return Err("stabilization_threshold must be greater than 0".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than 0".to_string());
        }
        if self.checkpoint_interval == 0 {
            return Err("checkpoint_interval must be greater than 0".to_string());
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be greater than 0".to_string());
        }
        if self.poll_interval_ms > self.poll_timeout_ms {
            return Err("poll_interval_ms must not exceed poll_timeout_ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = CollectorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.worst_case_wait(), Duration::from_secs(15 + 5 * 500));
    }

    #[test]
    fn test_worst_case_wait_saturates() {
        let settings = CollectorSettings {
            max_iterations: usize::MAX,
            poll_timeout_ms: u64::MAX / 2,
            ..CollectorSettings::default()
        };
        assert_eq!(settings.worst_case_wait(), Duration::from_millis(u64::MAX));

        let settings = CollectorSettings {
            max_iterations: 1_000_000,
            poll_timeout_ms: 5_000,
            initial_load_timeout_ms: 0,
            ..CollectorSettings::default()
        };
        assert_eq!(settings.worst_case_wait(), Duration::from_secs(5_000_000));
    }

    #[test]
    fn test_rejects_zero_bounds() {
        let settings = CollectorSettings {
            max_iterations: 0,
            ..CollectorSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = CollectorSettings {
            poll_interval_ms: 6_000,
            ..CollectorSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
