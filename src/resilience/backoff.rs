//! Delay between reload cycles.
//!
//! A healthy synchronizer waits the regular interval. Each consecutive failed
//! cycle doubles the wait from `base_backoff_ms` up to `max_backoff_ms`, minus
//! a random share of up to a fifth so many clients that lost the manager at the
//! same moment do not come back in lockstep.

use std::time::Duration;

use rand::Rng;

use crate::config::ReloadConfig;

/// Wait before the next reload given the current failure streak.
pub fn reload_delay(config: &ReloadConfig, consecutive_failures: u32) -> Duration {
    if consecutive_failures == 0 {
        return Duration::from_secs(config.interval_secs);
    }

    let doubled = config
        .base_backoff_ms
        .checked_shl(consecutive_failures - 1)
        .filter(|ms| ms >> (consecutive_failures - 1) == config.base_backoff_ms)
        .unwrap_or(u64::MAX);
    let ceiling = doubled.min(config.max_backoff_ms);

    let spread = ceiling / 5;
    let shaved = if spread > 0 {
        rand::thread_rng().gen_range(0..=spread)
    } else {
        0
    };

    Duration::from_millis(ceiling - shaved)
}
