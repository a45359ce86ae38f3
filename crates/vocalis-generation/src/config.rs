//! Generation service configuration.

use std::time::Duration;

/// Fixed cadence between status polls for an active job.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Delay between result delivery and the follow-up history refresh.
///
/// Masks backend write latency between artifact creation and the
/// record becoming visible in the history listing. Best-effort; a
/// later manual refresh must still succeed on its own.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Default ceiling on poll attempts before a job is failed with
/// a timeout. 240 attempts at 500 ms is roughly two minutes.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 240;

/// Tuning knobs for the generation services.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Interval between status polls.
    pub poll_interval: Duration,
    /// Delay before the deferred history refresh after delivery.
    pub settle_delay: Duration,
    /// Maximum poll attempts before giving up with a timeout.
    ///
    /// `None` polls until the slot is cancelled or torn down.
    pub max_poll_attempts: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
            max_poll_attempts: Some(DEFAULT_MAX_POLL_ATTEMPTS),
        }
    }
}

impl GenerationConfig {
    /// Override the poll interval.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the settle delay before the deferred history refresh.
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Override the poll-attempt ceiling. `None` disables the ceiling.
    #[must_use]
    pub const fn with_max_poll_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_poll_attempts = attempts;
        self
    }
}
