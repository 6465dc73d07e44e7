// Fri Oct 16 2026 - Alex

pub mod error;
pub mod guard;
pub mod runner;

pub use error::{MonitorError, MonitorResult};
pub use guard::BackendGuard;
pub use runner::{Monitor, RunSummary};
