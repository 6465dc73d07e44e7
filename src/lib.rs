// Fri Oct 16 2026 - Alex

pub mod automation;
pub mod collector;
pub mod config;
pub mod diff;
pub mod model;
pub mod monitor;
pub mod session;
pub mod snapshot;
pub mod ui;

pub use automation::{AutomationBackend, FollowerView, ReplayBackend};
pub use collector::{Collector, CollectorSettings};
pub use config::Config;
pub use diff::{diff, DiffResult};
pub use model::{FollowerEntry, FollowerSet};
pub use monitor::{Monitor, MonitorError};
pub use snapshot::{Snapshot, SnapshotStore};
