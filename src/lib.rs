//! Sort task consume-config synchronizer.
//!
//! Polls the manager for the cache-zone topology of a sort task, detects
//! changes by fingerprint and atomically publishes a queryable snapshot of
//! the topics the task should consume.

pub mod admin;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod manager;
pub mod observability;
pub mod resilience;
pub mod store;
pub mod sync;
pub mod topology;

pub use config::SdkConfig;
pub use error::{FetchError, SyncError};
pub use lifecycle::{Shutdown, ShutdownSignal};
pub use store::SnapshotStore;
pub use sync::{ConfigPoller, QueryConsumeConfig, ReloadStatus};
pub use topology::{Cluster, ConsumeConfig, Snapshot, Topic};
