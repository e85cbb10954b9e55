//! Topology subsystem: the queryable view of which topics each sort task reads.
//!
//! # Data Flow
//! ```text
//! ManagerResponse (zones → clusters → topics)
//!     → transform.rs (validate + flatten)
//!     → Snapshot (sort task id → ordered topics)
//!     → store (atomic publish)
//! ```

pub mod transform;
pub mod types;

pub use transform::{transform, TransformError};
pub use types::{Cluster, ConsumeConfig, Snapshot, Topic};
