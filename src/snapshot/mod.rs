// Fri Oct 16 2026 - Alex

pub mod atomic;
pub mod error;
pub mod record;
pub mod store;

pub use atomic::write_atomic;
pub use error::{StoreError, StoreResult};
pub use record::{FollowerRecord, Snapshot, SnapshotRecord};
pub use store::SnapshotStore;
