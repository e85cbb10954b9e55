//! Background reload loop.
//!
//! Lets callers read [`QueryConsumeConfig::current_consume_config`] without
//! paying a manager round trip per query.

use std::sync::Arc;

use tokio::time::sleep;

use crate::config::ReloadConfig;
use crate::lifecycle::ShutdownSignal;
use crate::manager::fetcher::ConfigFetcher;
use crate::resilience::reload_delay;
use crate::sync::query::QueryConsumeConfig;

pub struct ConfigPoller<F> {
    query: Arc<QueryConsumeConfig<F>>,
    config: ReloadConfig,
}

impl<F: ConfigFetcher + 'static> ConfigPoller<F> {
    pub fn new(query: Arc<QueryConsumeConfig<F>>, config: ReloadConfig) -> Self {
        Self { query, config }
    }

    /// Reload until the shutdown signal fires. The first cycle runs immediately.
    pub async fn run(self, mut shutdown: ShutdownSignal) {
        tracing::info!(interval_secs = self.config.interval_secs, "Config poller starting");

        let mut consecutive_failures = 0u32;
        loop {
            let status = tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                status = self.query.reload_once() => status,
            };

            if status.is_success() {
                consecutive_failures = 0;
            } else {
                consecutive_failures = consecutive_failures.saturating_add(1);
                tracing::warn!(
                    outcome = status.label(),
                    consecutive_failures,
                    "Reload did not succeed, backing off"
                );
            }

            tokio::select! {
                _ = sleep(reload_delay(&self.config, consecutive_failures)) => {}
                _ = shutdown.wait() => break,
            }
        }

        tracing::info!("Config poller received shutdown signal, exiting loop");
    }
}
