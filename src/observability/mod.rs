//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Reload cycle produces:
//!     → logging.rs (structured tracing events)
//!     → stats.rs (per sort task counters, read back by callers)
//!     → metrics.rs (counters, gauges, histograms for Prometheus)
//! ```

pub mod logging;
pub mod metrics;
pub mod stats;

pub use stats::{SortTaskStatistics, StatManager, StatisticsSnapshot};
