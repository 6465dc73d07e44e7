// Fri Oct 16 2026 - Alex

use crate::model::FollowerSet;
use crate::snapshot::{Snapshot, SnapshotStore, StoreResult};

/// Destination of periodic and final saves during collection.
pub trait CheckpointSink {
    fn checkpoint(&mut self, followers: &FollowerSet) -> StoreResult<()>;
}

/// Saves checkpoints through a [`SnapshotStore`] for one account and keeps
/// the last snapshot written.
#[derive(Debug)]
pub struct StoreCheckpoint<'a> {
    store: &'a SnapshotStore,
    owner_handle: String,
    last: Option<Snapshot>,
}

impl<'a> StoreCheckpoint<'a> {
    pub fn new(store: &'a SnapshotStore, owner_handle: &str) -> Self {
        Self {
            store,
            owner_handle: owner_handle.to_string(),
            last: None,
        }
    }

    pub fn into_last_snapshot(self) -> Option<Snapshot> {
        self.last
    }
}

impl CheckpointSink for StoreCheckpoint<'_> {
    fn checkpoint(&mut self, followers: &FollowerSet) -> StoreResult<()> {
        let snapshot = self.store.save(followers, &self.owner_handle)?;
        self.last = Some(snapshot);
        Ok(())
    }
}
