// Fri Oct 16 2026 - Alex

use crate::collector::IterationReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner showing live collection progress.
pub struct CollectionSpinner {
    spinner: ProgressBar,
}

impl CollectionSpinner {
    pub fn new(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner }
    }

    /// Callback for [`crate::collector::Collector::with_observer`].
    pub fn observer(&self) -> impl FnMut(&IterationReport) + 'static {
        let spinner = self.spinner.clone();
        move |report: &IterationReport| {
            spinner.set_message(format_report(report));
        }
    }

    pub fn success(&self, message: &str) {
        self.spinner.finish_with_message(format!("✓ {}", message));
    }

    pub fn failure(&self, message: &str) {
        self.spinner.finish_with_message(format!("✗ {}", message));
    }
}

impl Drop for CollectionSpinner {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

pub fn format_report(report: &IterationReport) -> String {
    let mut msg = format!(
        "scroll #{} | {} followers (+{}) | idle {}",
        report.iteration, report.total, report.new_entries, report.stable_rounds
    );
    if !report.content_grew {
        msg.push_str(" | list not growing");
    }
    if report.checkpointed {
        msg.push_str(" | checkpoint");
    }
    msg
}
