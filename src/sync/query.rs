//! Reload cycle and consume-config queries.
//!
//! # Reload cycle
//! ```text
//! Idle → fetch ─┬─ FetchError ──────────────────────────→ Idle
//!               └─ classify ─┬─ Unchanged ───────────────→ Idle
//!                            ├─ ParamsError  (+counter) ─→ Idle
//!                            ├─ CommonError  (+counter) ─→ Idle
//!                            └─ Updated → transform → publish → Idle
//! ```
//!
//! Every failure degrades to "keep the previous snapshot"; queries always
//! answer, possibly from stale or empty data.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use crate::config::ManagerConfig;
use crate::error::{FetchError, SyncError};
use crate::manager::classifier::{classify, Outcome};
use crate::manager::fetcher::{ConfigFetcher, FetchRequest, HttpConfigFetcher};
use crate::observability::{metrics, StatManager};
use crate::store::SnapshotStore;
use crate::topology::{transform, ConsumeConfig};

/// Result of one reload cycle.
#[derive(Debug)]
pub enum ReloadStatus {
    Unchanged,
    Updated { fingerprint: String, tasks: usize },
    ParamsError(i32),
    CommonError(i32),
    Failed(SyncError),
}

impl ReloadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReloadStatus::Unchanged => "unchanged",
            ReloadStatus::Updated { .. } => "updated",
            ReloadStatus::ParamsError(_) => "params_error",
            ReloadStatus::CommonError(_) => "common_error",
            ReloadStatus::Failed(_) => "failed",
        }
    }

    /// Whether the manager answered with usable data (changed or not).
    pub fn is_success(&self) -> bool {
        matches!(self, ReloadStatus::Unchanged | ReloadStatus::Updated { .. })
    }
}

/// Keeps one sort task's consume config in sync with the manager.
pub struct QueryConsumeConfig<F = HttpConfigFetcher> {
    config: ManagerConfig,
    fetcher: F,
    store: Arc<SnapshotStore>,
    stats: Arc<StatManager>,
    reload_lock: Mutex<()>,
}

impl QueryConsumeConfig<HttpConfigFetcher> {
    /// Client talking to the manager over HTTP.
    pub fn from_config(
        config: ManagerConfig,
        store: Arc<SnapshotStore>,
        stats: Arc<StatManager>,
    ) -> Result<Self, FetchError> {
        let fetcher = HttpConfigFetcher::new(&config)?;
        Ok(Self::new(config, fetcher, store, stats))
    }
}

impl<F: ConfigFetcher> QueryConsumeConfig<F> {
    pub fn new(
        config: ManagerConfig,
        fetcher: F,
        store: Arc<SnapshotStore>,
        stats: Arc<StatManager>,
    ) -> Self {
        Self {
            config,
            fetcher,
            store,
            stats,
            reload_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn stats(&self) -> &Arc<StatManager> {
        &self.stats
    }

    fn request(&self) -> FetchRequest {
        FetchRequest {
            api_url: self.config.api_url.clone(),
            sort_cluster_name: self.config.sort_cluster_name.clone(),
            sort_task_id: self.config.sort_task_id.clone(),
            md5: self.store.fingerprint(),
            api_version: self.config.api_version.clone(),
        }
    }

    /// Fetch the manager config once and publish it if it changed.
    ///
    /// Concurrent calls are serialised so an older response can never be
    /// published over a newer one.
    pub async fn reload_once(&self) -> ReloadStatus {
        let _guard = self.reload_lock.lock().await;
        let start = Instant::now();
        tracing::debug!(sort_task_id = %self.config.sort_task_id, "Reloading sort task config");

        let status = self.run_cycle().await;

        if let ReloadStatus::Failed(e) = &status {
            tracing::error!(
                sort_task_id = %self.config.sort_task_id,
                api_url = %self.config.api_url,
                error = %e,
                "Failed to reload sort task config, keeping current snapshot"
            );
        }
        metrics::record_reload(&self.config.sort_task_id, status.label(), start);
        status
    }

    async fn run_cycle(&self) -> ReloadStatus {
        let response = match self.fetcher.fetch(self.request()).await {
            Ok(response) => response,
            Err(e) => return ReloadStatus::Failed(e.into()),
        };

        let statistics = self.stats.get_statistics(&self.config.sort_task_id);
        let outcome = classify(response);
        tracing::debug!(outcome = outcome.label(), "Classified manager response");
        match outcome {
            Outcome::Unchanged => {
                tracing::debug!("Manager config unchanged");
                ReloadStatus::Unchanged
            }
            Outcome::Updated(response) => {
                statistics.add_manager_conf_changed_times(1);

                // The fingerprint is committed only together with a built snapshot.
                let fingerprint = response.md5.clone();
                let snapshot = match transform(response) {
                    Ok(snapshot) => snapshot,
                    Err(e) => return ReloadStatus::Failed(e.into()),
                };

                let tasks = snapshot.task_count();
                metrics::record_subscribed_topics(
                    &self.config.sort_task_id,
                    snapshot.topics(&self.config.sort_task_id).map_or(0, <[_]>::len),
                );
                self.store.replace(snapshot, fingerprint.clone());

                tracing::info!(md5 = %fingerprint, tasks, "Manager config updated");
                ReloadStatus::Updated { fingerprint, tasks }
            }
            Outcome::ParamsError(code) => {
                tracing::error!(code, "Manager rejected request params");
                statistics.add_request_manager_param_error_times(1);
                ReloadStatus::ParamsError(code)
            }
            Outcome::CommonError(code) => {
                tracing::error!(code, "Manager returned error code");
                statistics.add_request_manager_common_error_times(1);
                ReloadStatus::CommonError(code)
            }
        }
    }

    /// Reload, then answer from the freshly published snapshot.
    pub async fn query_consume_config(&self, sort_task_id: &str) -> ConsumeConfig {
        self.reload_once().await;
        self.current_consume_config(sort_task_id)
    }

    /// Answer from the current snapshot without contacting the manager.
    pub fn current_consume_config(&self, sort_task_id: &str) -> ConsumeConfig {
        ConsumeConfig::from_snapshot(&self.store.current_snapshot(), sort_task_id)
    }
}
