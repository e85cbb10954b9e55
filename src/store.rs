//! Currently published snapshot and its fingerprint.
//!
//! Readers load an `Arc` and never block on a reload; a publish swaps the
//! fingerprint, snapshot and version in one atomic store.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::topology::Snapshot;

/// One published revision.
#[derive(Debug, Clone, Default)]
pub struct Published {
    /// `""` until the first successful update.
    pub fingerprint: String,
    pub snapshot: Arc<Snapshot>,
    /// Number of publishes so far.
    pub version: u64,
}

#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: ArcSwap<Published>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint and snapshot from the same revision.
    pub fn published(&self) -> Arc<Published> {
        self.inner.load_full()
    }

    pub fn current_snapshot(&self) -> Arc<Snapshot> {
        self.inner.load().snapshot.clone()
    }

    pub fn fingerprint(&self) -> String {
        self.inner.load().fingerprint.clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.load().version
    }

    /// Publish a new revision, replacing the old one wholesale.
    pub fn replace(&self, snapshot: Snapshot, fingerprint: String) {
        let snapshot = Arc::new(snapshot);
        self.inner.rcu(|current| Published {
            fingerprint: fingerprint.clone(),
            snapshot: snapshot.clone(),
            version: current.version + 1,
        });
    }
}
