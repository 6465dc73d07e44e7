// Fri Oct 16 2026 - Alex

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "follower-watch")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Harvests an account's followers, snapshots them and reports changes", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect followers, save a snapshot and diff it against the last run
    Run(RunArgs),
    /// Compare two snapshot files
    Diff(DiffArgs),
    /// Summarize the latest snapshot and list history
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// JSON config file; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Account handle or profile URL
    #[arg(short, long)]
    pub account: Option<String>,

    /// Recorded session to play back through the collector
    #[arg(long)]
    pub replay: PathBuf,

    #[arg(long)]
    pub cookies: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub history_dir: Option<PathBuf>,

    #[arg(long)]
    pub max_iterations: Option<usize>,

    #[arg(long)]
    pub stabilization_threshold: Option<usize>,

    #[arg(long)]
    pub checkpoint_interval: Option<usize>,

    #[arg(long)]
    pub poll_timeout_ms: Option<u64>,

    /// Delay between growth checks; capped at the poll timeout
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub old: PathBuf,

    pub new: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[arg(long, default_value = "followers_history")]
    pub history_dir: PathBuf,

    /// Also list every follower in the latest snapshot
    #[arg(long)]
    pub followers: bool,
}

impl RunArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.replay.exists() {
            return Err(format!("Replay file does not exist: {:?}", self.replay));
        }
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Config file does not exist: {:?}", config));
            }
        }
        Ok(())
    }

    /// Applies command-line overrides on top of `base`.
    pub fn apply(&self, mut base: Config) -> Config {
        if let Some(account) = &self.account {
            base.account = account.clone();
        }
        if let Some(cookies) = &self.cookies {
            base.cookies_file = cookies.clone();
        }
        if let Some(output) = &self.output {
            base.output_file = output.clone();
        }
        if let Some(history_dir) = &self.history_dir {
            base.history_dir = history_dir.clone();
        }
        if let Some(n) = self.max_iterations {
            base.collector.max_iterations = n;
        }
        if let Some(n) = self.stabilization_threshold {
            base.collector.stabilization_threshold = n;
        }
        if let Some(n) = self.checkpoint_interval {
            base.collector.checkpoint_interval = n;
        }
        if let Some(ms) = self.poll_timeout_ms {
            base.collector.poll_timeout_ms = ms;
        }
        if let Some(ms) = self.poll_interval_ms {
            base.collector.poll_interval_ms = ms;
        }
        if self.poll_timeout_ms.is_some() || self.poll_interval_ms.is_some() {
            let timeout = base.collector.poll_timeout_ms;
            base.collector.poll_interval_ms = base.collector.poll_interval_ms.min(timeout);
        }
        base
    }
}

impl DiffArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.old.exists() {
            return Err(format!("Old file does not exist: {:?}", self.old));
        }
        if !self.new.exists() {
            return Err(format!("New file does not exist: {:?}", self.new));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_overrides() {
        let args = Args::parse_from([
            "follower-watch",
            "--log-level",
            "debug",
            "run",
            "--account",
            "alice",
            "--replay",
            "session.json",
            "--max-iterations",
            "20",
        ]);
        assert_eq!(args.log_level, "debug");

        let run = match args.command {
            Command::Run(run) => run,
            other => panic!("unexpected command {:?}", other),
        };
        let config = run.apply(Config::default());
        assert_eq!(config.account, "alice");
        assert_eq!(config.collector.max_iterations, 20);
        assert_eq!(config.collector.checkpoint_interval, 15);
    }

    #[test]
    fn test_short_poll_timeout_stays_valid() {
        let args = Args::parse_from([
            "follower-watch",
            "run",
            "--replay",
            "session.json",
            "--poll-timeout-ms",
            "100",
        ]);
        let Command::Run(run) = args.command else {
            panic!("expected run command");
        };
        let config = run.apply(Config::default());
        assert_eq!(config.collector.poll_timeout_ms, 100);
        assert_eq!(config.collector.poll_interval_ms, 100);
        assert!(config.collector.validate().is_ok());

        let args = Args::parse_from([
            "follower-watch",
            "run",
            "--replay",
            "session.json",
            "--poll-timeout-ms",
            "100",
            "--poll-interval-ms",
            "25",
        ]);
        let Command::Run(run) = args.command else {
            panic!("expected run command");
        };
        let config = run.apply(Config::default());
        assert_eq!(config.collector.poll_interval_ms, 25);
    }

    #[test]
    fn test_parse_diff() {
        let args = Args::parse_from(["follower-watch", "diff", "old.json", "new.json"]);
        assert!(matches!(args.command, Command::Diff(DiffArgs { .. })));
    }
}
