// Fri Oct 16 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
    Initializing,
    Collecting,
    Stabilized(Termination),
}

impl CollectorState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CollectorState::Stabilized(_))
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The stabilization counter reached its threshold.
    Converged,
    /// The iteration cap was hit first.
    IterationCap,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "no new followers for consecutive scrolls"),
            Termination::IterationCap => write!(f, "iteration cap reached"),
        }
    }
}
