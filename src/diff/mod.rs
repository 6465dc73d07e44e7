// Fri Oct 16 2026 - Alex

pub mod engine;
pub mod report;

pub use engine::{diff, DiffResult, NetChange};
pub use report::ChangeReport;
