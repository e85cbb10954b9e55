//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sort_sdk_manager_conf_changed_total` (counter): updated configs applied
//! - `sort_sdk_request_manager_param_error_total` (counter): `-101` responses
//! - `sort_sdk_request_manager_common_error_total` (counter): other error codes
//! - `sort_sdk_reload_total` (counter): reload cycles by outcome
//! - `sort_sdk_reload_duration_seconds` (histogram): manager round trip + publish
//! - `sort_sdk_subscribed_topics` (gauge): topics in the published snapshot
//!
//! All carry a `sort_task_id` label. Without an installed recorder the calls are no-ops.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_manager_conf_changed(sort_task_id: &str, n: u64) {
    counter!("sort_sdk_manager_conf_changed_total", "sort_task_id" => sort_task_id.to_string())
        .increment(n);
}

pub fn record_param_error(sort_task_id: &str, n: u64) {
    counter!("sort_sdk_request_manager_param_error_total", "sort_task_id" => sort_task_id.to_string())
        .increment(n);
}

pub fn record_common_error(sort_task_id: &str, n: u64) {
    counter!("sort_sdk_request_manager_common_error_total", "sort_task_id" => sort_task_id.to_string())
        .increment(n);
}

pub fn record_reload(sort_task_id: &str, outcome: &'static str, start: Instant) {
    counter!(
        "sort_sdk_reload_total",
        "sort_task_id" => sort_task_id.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("sort_sdk_reload_duration_seconds", "sort_task_id" => sort_task_id.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_subscribed_topics(sort_task_id: &str, topics: usize) {
    gauge!("sort_sdk_subscribed_topics", "sort_task_id" => sort_task_id.to_string())
        .set(topics as f64);
}
