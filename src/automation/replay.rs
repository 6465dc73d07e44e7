// Fri Oct 16 2026 - Alex

use super::{AutomationBackend, ExtractionError, FollowerView, RawFollower};
use crate::config::ConfigError;
use crate::session::{SessionCookie, SessionError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A captured browsing session: the page body served after navigation and
/// the rows mounted after each successive scroll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayRecording {
    pub page_content: String,
    pub views: Vec<Vec<RawFollower>>,
    /// View indices at which extraction fails.
    pub fail_at: Vec<usize>,
}

impl ReplayRecording {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Plays a [`ReplayRecording`] back through the automation traits.
///
/// View 0 is mounted on open. Each scroll mounts the next view, staying on the
/// last one once the recording is exhausted. The rendered count is the total
/// number of rows mounted so far, like a list that keeps appending cells.
#[derive(Debug)]
pub struct ReplayBackend {
    recording: ReplayRecording,
    failures: HashSet<usize>,
    cursor: usize,
    mounted: usize,
    url: Option<String>,
    cookies: Vec<SessionCookie>,
    closed: bool,
}

impl ReplayBackend {
    pub fn new(recording: ReplayRecording) -> Self {
        let failures = recording.fail_at.iter().copied().collect();
        Self {
            recording,
            failures,
            cursor: 0,
            mounted: 0,
            url: None,
            cookies: Vec::new(),
            closed: false,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn cookies(&self) -> &[SessionCookie] {
        &self.cookies
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn current_view(&self) -> &[RawFollower] {
        self.recording
            .views
            .get(self.cursor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn ensure_open(&self) -> Result<(), ExtractionError> {
        if self.url.is_none() || self.closed {
            return Err(ExtractionError::PageNotOpen);
        }
        Ok(())
    }
}

impl FollowerView for ReplayBackend {
    fn extract(&mut self) -> Result<Vec<RawFollower>, ExtractionError> {
        self.ensure_open()?;
        if self.failures.contains(&self.cursor) {
            return Err(ExtractionError::QueryFailed(format!(
                "recorded failure at view {}",
                self.cursor
            )));
        }
        Ok(self.current_view().to_vec())
    }

    fn scroll(&mut self) -> Result<(), ExtractionError> {
        self.ensure_open()?;
        if self.cursor + 1 < self.recording.views.len() {
            self.cursor += 1;
            self.mounted += self.current_view().len();
        }
        debug!("Replay at view {} ({} rows mounted)", self.cursor, self.mounted);
        Ok(())
    }

    fn rendered_count(&mut self) -> Result<usize, ExtractionError> {
        self.ensure_open()?;
        Ok(self.mounted)
    }
}

impl AutomationBackend for ReplayBackend {
    fn install_cookies(&mut self, cookies: &[SessionCookie]) -> Result<(), SessionError> {
        self.cookies = cookies.to_vec();
        Ok(())
    }

    fn open(&mut self, url: &str) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::Backend("backend already closed".to_string()));
        }
        self.url = Some(url.to_string());
        self.cursor = 0;
        self.mounted = self.current_view().len();
        Ok(())
    }

    fn page_content(&mut self) -> Result<String, SessionError> {
        Ok(self.recording.page_content.clone())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
