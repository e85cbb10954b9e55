//! Manager client subsystem.
//!
//! # Data Flow
//! ```text
//! FetchRequest (api url, cluster, task id, md5, api version)
//!     → fetcher.rs (GET with fixed headers and deadline)
//!     → response.rs (ManagerResponse document)
//!     → classifier.rs (unchanged / updated / params error / common error)
//! ```

pub mod classifier;
pub mod fetcher;
pub mod response;

pub use classifier::{classify, Outcome};
pub use fetcher::{ConfigFetcher, FetchRequest, HttpConfigFetcher};
pub use response::{CacheZone, CacheZoneData, ManagerResponse, RawTopic};
