//! Config synchronisation subsystem.
//!
//! # Data Flow
//! ```text
//! query_consume_config(id) ─┐
//! ConfigPoller tick ────────┴→ reload_once
//!                                → manager (fetch + classify)
//!                                → topology (transform)
//!                                → store (publish)
//! current_consume_config(id) → store (read only)
//! ```

pub mod poller;
pub mod query;

pub use poller::ConfigPoller;
pub use query::{QueryConsumeConfig, ReloadStatus};
