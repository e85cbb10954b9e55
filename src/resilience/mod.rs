//! Resilience helpers.
//!
//! Failed reload cycles are retried sooner than the regular interval, backing
//! off as the failure streak grows. The previous snapshot stays published
//! meanwhile.

pub mod backoff;

pub use backoff::reload_delay;
