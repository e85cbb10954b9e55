//! Per sort task statistics.
//!
//! Counters are kept in process so callers and the admin endpoint can read
//! them back; every increment is also forwarded to the metrics facade.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use crate::observability::metrics;

/// Counters for one sort task.
#[derive(Debug)]
pub struct SortTaskStatistics {
    sort_task_id: String,
    manager_conf_changed_times: AtomicU64,
    request_manager_param_error_times: AtomicU64,
    request_manager_common_error_times: AtomicU64,
}

/// Point-in-time copy of [`SortTaskStatistics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub manager_conf_changed_times: u64,
    pub request_manager_param_error_times: u64,
    pub request_manager_common_error_times: u64,
}

impl SortTaskStatistics {
    fn new(sort_task_id: &str) -> Self {
        Self {
            sort_task_id: sort_task_id.to_string(),
            manager_conf_changed_times: AtomicU64::new(0),
            request_manager_param_error_times: AtomicU64::new(0),
            request_manager_common_error_times: AtomicU64::new(0),
        }
    }

    pub fn add_manager_conf_changed_times(&self, n: u64) {
        self.manager_conf_changed_times.fetch_add(n, Ordering::Relaxed);
        metrics::record_manager_conf_changed(&self.sort_task_id, n);
    }

    pub fn add_request_manager_param_error_times(&self, n: u64) {
        self.request_manager_param_error_times.fetch_add(n, Ordering::Relaxed);
        metrics::record_param_error(&self.sort_task_id, n);
    }

    pub fn add_request_manager_common_error_times(&self, n: u64) {
        self.request_manager_common_error_times.fetch_add(n, Ordering::Relaxed);
        metrics::record_common_error(&self.sort_task_id, n);
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            manager_conf_changed_times: self.manager_conf_changed_times.load(Ordering::Relaxed),
            request_manager_param_error_times: self
                .request_manager_param_error_times
                .load(Ordering::Relaxed),
            request_manager_common_error_times: self
                .request_manager_common_error_times
                .load(Ordering::Relaxed),
        }
    }
}

/// Registry of statistics keyed by sort task id.
#[derive(Debug, Default)]
pub struct StatManager {
    tasks: DashMap<String, Arc<SortTaskStatistics>>,
}

impl StatManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics for `sort_task_id`, created on first use.
    pub fn get_statistics(&self, sort_task_id: &str) -> Arc<SortTaskStatistics> {
        if let Some(stats) = self.tasks.get(sort_task_id) {
            return stats.value().clone();
        }
        self.tasks
            .entry(sort_task_id.to_string())
            .or_insert_with(|| Arc::new(SortTaskStatistics::new(sort_task_id)))
            .value()
            .clone()
    }

    /// Current counters; zeroes for an unknown task.
    pub fn snapshot(&self, sort_task_id: &str) -> StatisticsSnapshot {
        self.tasks
            .get(sort_task_id)
            .map(|stats| stats.snapshot())
            .unwrap_or_default()
    }
}
