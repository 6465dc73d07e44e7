// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, DiffArgs, RunArgs, ShowArgs};
use crate::automation::{ReplayBackend, ReplayRecording};
use crate::config::Config;
use crate::diff::{diff, ChangeReport};
use crate::model::handle::PROFILE_URL_TEMPLATE;
use crate::monitor::{Monitor, RunSummary};
use crate::snapshot::SnapshotStore;
use crate::ui::progress::CollectionSpinner;
use crate::ui::{print_info, print_success};
use chrono::SecondsFormat;
use colored::Colorize;
use std::path::PathBuf;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        match args.command {
            Command::Run(run_args) => self.handle_run(run_args, args.quiet),
            Command::Diff(diff_args) => self.handle_diff(diff_args),
            Command::Show(show_args) => self.handle_show(show_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp_secs()
            .try_init()?;

        Ok(())
    }

    fn handle_run(&self, args: RunArgs, quiet: bool) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let base = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let config = args.apply(base);
        let recording = ReplayRecording::load(&args.replay)?;

        let spinner = (!quiet && !args.no_progress).then(|| CollectionSpinner::new("Collecting followers..."));

        let mut monitor = Monitor::new(config);
        if let Some(spinner) = &spinner {
            monitor = monitor.with_observer(spinner.observer());
        }

        let summary = match monitor.run(move || Ok(ReplayBackend::new(recording))) {
            Ok(summary) => summary,
            Err(e) => {
                if let Some(spinner) = &spinner {
                    spinner.failure("Collection failed");
                }
                return Err(e.into());
            }
        };

        if let Some(spinner) = &spinner {
            spinner.success(&format!("Collected {} followers", summary.snapshot.len()));
        }

        if !quiet {
            self.print_run_summary(&summary);
        }
        Ok(())
    }

    fn handle_diff(&self, args: DiffArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let old = SnapshotStore::load(&args.old)?;
        let new = SnapshotStore::load(&args.new)?;

        print_info(&format!("Old: {} ({} followers)", args.old.display(), old.len()));
        print_info(&format!("New: {} ({} followers)", args.new.display(), new.len()));
        println!();

        let result = diff(Some(&old), &new);
        ChangeReport::new(result.as_ref())
            .with_previous_timestamp(&old.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false))
            .print_colored();

        Ok(())
    }

    fn handle_show(&self, args: ShowArgs) -> anyhow::Result<()> {
        let store = SnapshotStore::new(
            PathBuf::from("followers_data.json"),
            args.history_dir.clone(),
            PROFILE_URL_TEMPLATE,
        );

        match store.load_latest()? {
            Some(latest) => {
                println!("{}", "Latest Snapshot".cyan().bold());
                println!("{}", "-".repeat(40).cyan());
                println!("  Account: {}", latest.owner_handle.green());
                println!("  Taken: {}", latest.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false));
                println!("  Followers: {}", latest.len().to_string().green());
                if args.followers {
                    for follower in latest.followers() {
                        println!("    {} (@{}) {}", follower.name, follower.username, follower.profile_url.dimmed());
                    }
                }
            }
            None => print_info(&format!("No snapshot in {}", args.history_dir.display())),
        }

        let history = store.history()?;
        println!();
        println!("{} ({}):", "History".yellow().bold(), history.len());
        for path in history {
            println!("  {}", path.display());
        }

        Ok(())
    }

    fn print_run_summary(&self, summary: &RunSummary) {
        println!();
        println!("{}", "=".repeat(50).cyan());
        print_success(&format!(
            "{} iterations, stopped: {}",
            summary.collection.iterations, summary.collection.termination
        ));
        print_success(&format!("Account: @{}", summary.account));
        print_success(&format!("Followers: {}", summary.snapshot.len()));
        if summary.collection.failed_extractions > 0 {
            println!(
                "{} {} extractions failed",
                "[!]".yellow(),
                summary.collection.failed_extractions
            );
        }
        println!();
        summary.report().print_colored();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
