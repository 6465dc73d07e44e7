// Fri Oct 16 2026 - Alex

use super::error::{MonitorError, MonitorResult};
use super::guard::BackendGuard;
use crate::automation::AutomationBackend;
use crate::collector::{Collection, Collector, IterationReport, StoreCheckpoint};
use crate::config::Config;
use crate::diff::{diff, ChangeReport, DiffResult};
use crate::model::followers_url;
use crate::session::{self, load_cookies, SessionCookie, SessionError};
use crate::snapshot::{Snapshot, SnapshotStore};
use chrono::SecondsFormat;
use log::{error, info, warn};

/// Outcome of one monitoring run.
#[derive(Debug)]
pub struct RunSummary {
    pub account: String,
    pub collection: Collection,
    pub snapshot: Snapshot,
    pub previous: Option<Snapshot>,
    pub diff: Option<DiffResult>,
}

impl RunSummary {
    pub fn report(&self) -> ChangeReport<'_> {
        let report = ChangeReport::new(self.diff.as_ref());
        match &self.previous {
            Some(previous) => report.with_previous_timestamp(
                &previous.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            ),
            None => report,
        }
    }
}

/// One end-to-end run: credentials, session, collection, save and diff.
pub struct Monitor {
    config: Config,
    observer: Option<Box<dyn FnMut(&IterationReport)>>,
}

impl Monitor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&IterationReport) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs with cookies read from the configured file or environment.
    /// Credentials are resolved before `launch` is called.
    pub fn run<B, F>(self, launch: F) -> MonitorResult<RunSummary>
    where
        B: AutomationBackend,
        F: FnOnce() -> Result<B, SessionError>,
    {
        self.config.validate()?;
        let (cookies, source) = load_cookies(&self.config.cookies_file, &self.config.cookies_env)?;
        info!("Loaded {} cookies from {}", cookies.len(), source);
        self.run_with_cookies(&cookies, launch)
    }

    pub fn run_with_cookies<B, F>(mut self, cookies: &[SessionCookie], launch: F) -> MonitorResult<RunSummary>
    where
        B: AutomationBackend,
        F: FnOnce() -> Result<B, SessionError>,
    {
        self.config.validate()?;
        let account = self.config.account_handle();

        info!("Launching browser");
        let mut backend = BackendGuard::new(launch()?);
        establish_session(&mut *backend, cookies, &account)?;
        info!("Page loaded successfully");

        let store = SnapshotStore::from_config(&self.config);
        let previous = match store.load_latest() {
            Ok(previous) => previous,
            Err(e) => {
                warn!("Ignoring unreadable latest snapshot: {}", e);
                None
            }
        };

        info!(
            "Collection will wait at most {}s for new rows",
            self.config.collector.worst_case_wait().as_secs()
        );
        let mut collector = Collector::new(self.config.collector.clone());
        if let Some(observer) = self.observer.take() {
            collector = collector.with_observer(observer);
        }

        let mut sink = StoreCheckpoint::new(&store, &account);
        let collection = collector.run(&mut *backend, &mut sink);

        let snapshot = match (collection.final_saved, sink.into_last_snapshot()) {
            (true, Some(snapshot)) => snapshot,
            _ => {
                error!("Final snapshot was not persisted; comparing against in-memory result");
                Snapshot::from_set(&account, &collection.followers, store.url_template())
            }
        };

        let diff = diff(previous.as_ref(), &snapshot);
        let summary = RunSummary {
            account,
            collection,
            snapshot,
            previous,
            diff,
        };
        summary.report().log();

        Ok(summary)
    }
}

fn establish_session<B: AutomationBackend>(
    backend: &mut B,
    cookies: &[SessionCookie],
    account: &str,
) -> Result<(), MonitorError> {
    backend.install_cookies(cookies)?;

    let url = followers_url(account);
    info!("Navigating to {}'s followers page", account);
    backend.open(&url)?;

    let content = backend.page_content()?;
    if session::looks_logged_out(&content) {
        error!("Not logged in properly. Check your cookies.");
        return Err(SessionError::NotAuthenticated.into());
    }
    Ok(())
}
