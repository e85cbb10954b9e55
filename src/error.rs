//! Error types for the config synchronizer.
//!
//! Protocol-level failures reported by the manager (`errCode` other than
//! "updated"/"unchanged") are not errors here: they are classified outcomes,
//! see [`crate::manager::classifier`].

use thiserror::Error;

pub use crate::topology::transform::TransformError;

/// Failure of a single manager round trip. A fetch never yields a partial document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured manager API URL could not be parsed.
    #[error("Invalid manager URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network or IO failure while talking to the manager.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured deadline.
    #[error("Manager request timed out after {0} seconds")]
    Timeout(u64),

    /// The body was not a valid manager response document.
    #[error("Failed to decode manager response: {0}")]
    Decode(String),
}

/// Anything that aborts a reload cycle before the new snapshot is published.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result type for reload internals.
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Timeout(10);
        assert_eq!(err.to_string(), "Manager request timed out after 10 seconds");

        let err = SyncError::from(FetchError::Decode("expected value".into()));
        assert!(err.to_string().contains("expected value"));

        let err = SyncError::from(TransformError::MissingData);
        assert!(matches!(err, SyncError::Transform(_)));
    }
}
