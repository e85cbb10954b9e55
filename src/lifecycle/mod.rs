//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → main triggers shutdown
//!
//! Shutdown (shutdown.rs):
//!     trigger → poller exits its loop → admin server drains → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
