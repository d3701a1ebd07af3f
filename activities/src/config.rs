use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Polling cadence configuration for activity runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Retry interval, in milliseconds, for tables with a small known record
    /// count.
    pub fast_interval_ms: u64,

    /// Retry interval, in milliseconds, for large tables and tables with an
    /// unknown record count.
    pub slow_interval_ms: u64,

    /// Record-count hint below which the fast interval applies.
    pub fast_threshold_records: u64,

    /// Fixed delay applied after a run settles, letting the remote system's
    /// state propagate before the next table starts.
    pub settle_grace_ms: u64,
}

impl PollingConfig {
    /// Picks the retry interval for a table from its record-count hint.
    ///
    /// A hint of zero means the record count is unknown and selects the slow
    /// interval.
    pub fn interval_for(&self, num_records: u64) -> Duration {
        if num_records > 0 && num_records < self.fast_threshold_records {
            Duration::from_millis(self.fast_interval_ms)
        } else {
            Duration::from_millis(self.slow_interval_ms)
        }
    }

    pub fn settle_grace(&self) -> Duration {
        Duration::from_millis(self.settle_grace_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            fast_interval_ms: 1_000,
            slow_interval_ms: 10_000,
            fast_threshold_records: 1_000,
            settle_grace_ms: 100,
        }
    }
}

/// Configuration of the activities step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepConfig {
    /// Connector kind of the source system, used when building the source
    /// connection descriptor of a new activity.
    pub source_kind: String,

    /// Connector kind of the target system.
    pub target_kind: String,

    /// Polling cadence for submitted runs.
    #[serde(default)]
    pub polling: PollingConfig,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            source_kind: "cloudant".to_owned(),
            target_kind: "dashdb".to_owned(),
            polling: PollingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intervals_match_the_documented_cadence() {
        let config = PollingConfig::default();
        assert_eq!(config.fast_interval_ms, 1_000);
        assert_eq!(config.slow_interval_ms, 10_000);
        assert_eq!(config.fast_threshold_records, 1_000);
        assert_eq!(config.settle_grace(), Duration::from_millis(100));
    }

    #[test]
    fn small_known_record_counts_poll_fast() {
        let config = PollingConfig::default();
        assert_eq!(config.interval_for(1), Duration::from_millis(1_000));
        assert_eq!(config.interval_for(999), Duration::from_millis(1_000));
    }

    #[test]
    fn unknown_and_large_record_counts_poll_slow() {
        let config = PollingConfig::default();
        assert_eq!(config.interval_for(0), Duration::from_millis(10_000));
        assert_eq!(config.interval_for(1_000), Duration::from_millis(10_000));
        assert_eq!(config.interval_for(50_000), Duration::from_millis(10_000));
    }
}
