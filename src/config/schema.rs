//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the synchronizer.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the sort config synchronizer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SdkConfig {
    /// Manager endpoint and identity of this sort task.
    pub manager: ManagerConfig,

    /// Background reload scheduling.
    pub reload: ReloadConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Read-only admin endpoint.
    pub admin: AdminConfig,
}

/// Manager API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Full URL of the cache-zone config endpoint.
    pub api_url: String,

    /// Value sent as `apiVersion`.
    pub api_version: String,

    /// Value sent as `sortClusterName`.
    pub sort_cluster_name: String,

    /// Value sent as `sortTaskId`.
    pub sort_task_id: String,

    /// Deadline for a single manager round trip in seconds.
    pub request_timeout_secs: u64,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8083/inlong/manager/api/sort/getCacheZoneConfig".to_string(),
            api_version: "1.0".to_string(),
            sort_cluster_name: String::new(),
            sort_task_id: String::new(),
            request_timeout_secs: 10,
            user_agent: "inlong-sort-sdk".to_string(),
            use_system_proxy: true,
        }
    }
}

/// Background reload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Interval between successful reloads in seconds.
    pub interval_secs: u64,

    /// Base delay for exponential backoff after a failed reload in milliseconds.
    pub base_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds.
    pub max_backoff_ms: u64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            base_backoff_ms: 1000,
            max_backoff_ms: 60_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Admin endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Enable the admin endpoint.
    pub enabled: bool,

    /// Admin endpoint bind address.
    pub bind_address: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bind_address: "127.0.0.1:8081".to_string(),
        }
    }
}
