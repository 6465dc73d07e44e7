// Fri Oct 16 2026 - Alex

//! Seams to the browser automation layer.
//!
//! The collector only ever talks to a [`FollowerView`]; the monitor also needs
//! an [`AutomationBackend`] to establish the session. A real browser driver and
//! the bundled [`replay::ReplayBackend`] both implement these.

pub mod error;
pub mod replay;
pub mod wait;

pub use error::ExtractionError;
pub use replay::{ReplayBackend, ReplayRecording};
pub use wait::wait_until;

use crate::session::{SessionCookie, SessionError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One row as read from the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFollower {
    pub name: String,
    pub username: String,
}

impl RawFollower {
    pub fn new(name: &str, username: &str) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
        }
    }
}

/// The virtualized follower list as currently mounted.
pub trait FollowerView {
    /// Reads the rows mounted right now. Only a window of the list is ever
    /// mounted, so the result is always partial.
    fn extract(&mut self) -> Result<Vec<RawFollower>, ExtractionError>;

    /// Issues one scroll gesture. There is no success signal.
    fn scroll(&mut self) -> Result<(), ExtractionError>;

    /// Number of row cells present in the document.
    fn rendered_count(&mut self) -> Result<usize, ExtractionError>;

    /// Blocks until at least one row is rendered or the timeout elapses.
    fn wait_for_rows(&mut self, timeout: Duration, interval: Duration) -> bool {
        wait_until(timeout, interval, || {
            self.rendered_count().map(|count| count > 0).unwrap_or(false)
        })
    }

    /// Blocks until the rendered count exceeds `previous` or the timeout
    /// elapses. Backends with a native bounded wait should override this
    /// keeping the same timeout and interval semantics.
    fn wait_for_growth(&mut self, previous: usize, timeout: Duration, interval: Duration) -> bool {
        wait_until(timeout, interval, || {
            self.rendered_count().map(|count| count > previous).unwrap_or(false)
        })
    }
}

/// Session establishment and lifetime of the automation resources.
pub trait AutomationBackend: FollowerView {
    fn install_cookies(&mut self, cookies: &[SessionCookie]) -> Result<(), SessionError>;

    fn open(&mut self, url: &str) -> Result<(), SessionError>;

    fn page_content(&mut self) -> Result<String, SessionError>;

    /// Releases the browser. Must be safe to call more than once.
    fn close(&mut self);
}
