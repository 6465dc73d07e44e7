// Fri Oct 16 2026 - Alex

use super::checkpoint::CheckpointSink;
use super::settings::CollectorSettings;
use super::state::{CollectorState, Termination};
use crate::automation::FollowerView;
use crate::model::{FollowerEntry, FollowerSet};
use log::{debug, error, info, warn};
use std::panic::{self, AssertUnwindSafe};

/// What happened in one scroll iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationReport {
    pub iteration: usize,
    pub new_entries: usize,
    pub total: usize,
    pub stable_rounds: usize,
    pub content_grew: bool,
    pub checkpointed: bool,
}

/// Result of a finished collection.
#[derive(Debug, Clone)]
pub struct Collection {
    pub followers: FollowerSet,
    /// Always `Stabilized` once `run` returns.
    pub state: CollectorState,
    pub iterations: usize,
    pub termination: Termination,
    /// Iterations at which periodic checkpoints were written.
    pub checkpoints: Vec<usize>,
    pub failed_extractions: usize,
    /// Whether the unconditional save on termination succeeded.
    pub final_saved: bool,
}

/// Drives the scroll, wait, extract and merge loop over a virtualized list.
///
/// No single extraction sees the whole list, so the collector accumulates
/// every partial view into one set keyed by handle and stops once the set has
/// not grown for `stabilization_threshold` iterations in a row, or when
/// `max_iterations` is reached.
pub struct Collector {
    settings: CollectorSettings,
    state: CollectorState,
    followers: FollowerSet,
    iterations: usize,
    stable_rounds: usize,
    checkpoints: Vec<usize>,
    failed_extractions: usize,
    observer: Option<Box<dyn FnMut(&IterationReport)>>,
}

impl Collector {
    pub fn new(settings: CollectorSettings) -> Self {
        Self {
            settings,
            state: CollectorState::Initializing,
            followers: FollowerSet::new(),
            iterations: 0,
            stable_rounds: 0,
            checkpoints: Vec::new(),
            failed_extractions: 0,
            observer: None,
        }
    }

    /// Called after every collecting iteration.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&IterationReport) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Runs the loop to termination and writes the final checkpoint.
    ///
    /// If the view panics mid-collection, whatever was accumulated so far is
    /// still handed to `sink` before the panic continues to unwind.
    pub fn run(mut self, view: &mut dyn FollowerView, sink: &mut dyn CheckpointSink) -> Collection {
        info!("Starting follower collection process...");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.collect(view, sink)));
        let termination = match outcome {
            Ok(termination) => termination,
            Err(payload) => {
                error!(
                    "Collection aborted at iteration {}, saving {} followers collected so far",
                    self.iterations,
                    self.followers.len()
                );
                if let Err(e) = sink.checkpoint(&self.followers) {
                    error!("Emergency save failed: {}", e);
                }
                panic::resume_unwind(payload);
            }
        };

        self.state = CollectorState::Stabilized(termination);
        info!(
            "Scrolling completed after {} iterations ({}). Total followers collected: {}",
            self.iterations,
            termination,
            self.followers.len()
        );

        let final_saved = match sink.checkpoint(&self.followers) {
            Ok(()) => true,
            Err(e) => {
                error!("Final save failed: {}", e);
                false
            }
        };

        Collection {
            followers: self.followers,
            state: self.state,
            iterations: self.iterations,
            termination,
            checkpoints: self.checkpoints,
            failed_extractions: self.failed_extractions,
            final_saved,
        }
    }

    fn collect(&mut self, view: &mut dyn FollowerView, sink: &mut dyn CheckpointSink) -> Termination {
        if view.wait_for_rows(self.settings.initial_load_timeout(), self.settings.poll_interval()) {
            info!("Initial followers loaded");
        } else {
            warn!("Could not find follower cells, collecting anyway");
        }

        self.absorb(view);
        info!("Initial collection: {} unique followers", self.followers.len());
        self.state = CollectorState::Collecting;

        loop {
            if let Some(termination) = self.termination() {
                return termination;
            }
            let report = self.step(view, sink);
            if let Some(observer) = self.observer.as_mut() {
                observer(&report);
            }
        }
    }

    fn termination(&self) -> Option<Termination> {
        if self.stable_rounds >= self.settings.stabilization_threshold {
            Some(Termination::Converged)
        } else if self.iterations >= self.settings.max_iterations {
            Some(Termination::IterationCap)
        } else {
            None
        }
    }

    fn step(&mut self, view: &mut dyn FollowerView, sink: &mut dyn CheckpointSink) -> IterationReport {
        self.iterations += 1;
        debug!("Scroll #{}", self.iterations);

        let rendered_before = view.rendered_count().unwrap_or_else(|e| {
            warn!("Could not count rendered rows: {}", e);
            0
        });

        let content_grew = match view.scroll() {
            Ok(()) => view.wait_for_growth(
                rendered_before,
                self.settings.poll_timeout(),
                self.settings.poll_interval(),
            ),
            Err(e) => {
                warn!("Scroll #{} failed: {}", self.iterations, e);
                false
            }
        };

        let new_entries = self.absorb(view);
        debug!("New followers found: {}", new_entries);

        if new_entries == 0 {
            self.stable_rounds += 1;
            debug!(
                "No new followers ({}/{})",
                self.stable_rounds, self.settings.stabilization_threshold
            );
        } else {
            self.stable_rounds = 0;
        }

        let checkpointed = self.iterations % self.settings.checkpoint_interval == 0;
        if checkpointed {
            match sink.checkpoint(&self.followers) {
                Ok(()) => {
                    self.checkpoints.push(self.iterations);
                    info!("Progress checkpoint: {} followers collected", self.followers.len());
                }
                Err(e) => error!("Checkpoint at iteration {} failed: {}", self.iterations, e),
            }
        }

        IterationReport {
            iteration: self.iterations,
            new_entries,
            total: self.followers.len(),
            stable_rounds: self.stable_rounds,
            content_grew,
            checkpointed,
        }
    }

    /// Extracts the current view and merges it. A failed extraction yields
    /// nothing and is otherwise ignored.
    fn absorb(&mut self, view: &mut dyn FollowerView) -> usize {
        let rows = match view.extract() {
            Ok(rows) => rows,
            Err(e) => {
                error!("Error extracting follower data: {}", e);
                self.failed_extractions += 1;
                return 0;
            }
        };

        let batch = rows
            .iter()
            .filter_map(|row| FollowerEntry::parse(&row.name, &row.username));
        self.followers.merge(batch)
    }
}
