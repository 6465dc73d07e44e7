// Fri Oct 16 2026 - Alex

pub mod checkpoint;
pub mod runner;
pub mod settings;
pub mod state;

pub use checkpoint::{CheckpointSink, StoreCheckpoint};
pub use runner::{Collection, Collector, IterationReport};
pub use settings::CollectorSettings;
pub use state::{CollectorState, Termination};
