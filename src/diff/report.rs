// Fri Oct 16 2026 - Alex

use super::engine::{DiffResult, NetChange};
use colored::Colorize;
use log::info;
use std::fmt;

/// Human-readable account of the changes since the previous run.
#[derive(Debug, Clone)]
pub struct ChangeReport<'a> {
    pub previous_timestamp: Option<String>,
    pub result: Option<&'a DiffResult>,
}

impl<'a> ChangeReport<'a> {
    pub fn new(result: Option<&'a DiffResult>) -> Self {
        Self {
            previous_timestamp: None,
            result,
        }
    }

    pub fn with_previous_timestamp(mut self, timestamp: &str) -> Self {
        self.previous_timestamp = Some(timestamp.to_string());
        self
    }

    /// Report lines, without color.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let result = match self.result {
            Some(result) => result,
            None => {
                lines.push("First run - no previous data to compare".to_string());
                return lines;
            }
        };

        if let Some(ts) = &self.previous_timestamp {
            lines.push(format!("Comparing with data from {}", ts));
        }
        lines.push("=== CHANGES SINCE LAST RUN ===".to_string());

        if result.removed_count > 0 {
            lines.push(format!("{} people unfollowed", result.removed_count));
            lines.extend(result.removed.iter().map(|e| format!("  - {}", e)));
        } else {
            lines.push("No one unfollowed".to_string());
        }

        if result.added_count > 0 {
            lines.push(format!("{} new followers:", result.added_count));
            lines.extend(result.added.iter().map(|e| format!("  - {}", e)));
        } else {
            lines.push("No new followers".to_string());
        }

        lines.push(match result.classification() {
            NetChange::Gain => format!("Net gain: +{} followers", result.net_change()),
            NetChange::Loss => format!("Net loss: {} followers", result.net_change()),
            NetChange::None => "No net change in followers".to_string(),
        });

        lines
    }

    pub fn log(&self) {
        for line in self.lines() {
            info!("{}", line);
        }
    }

    pub fn print_colored(&self) {
        for line in self.lines() {
            let styled = if line.starts_with("===") {
                line.cyan().bold()
            } else if line.starts_with("  - ") {
                line.normal()
            } else if line.starts_with("No") {
                line.dimmed()
            } else if line.starts_with("Net gain") || line.contains("new followers") {
                line.green()
            } else if line.starts_with("Net loss") || line.contains("unfollowed") {
                line.red()
            } else {
                line.dimmed()
            };
            println!("{}", styled);
        }
    }
}

impl fmt::Display for ChangeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FollowerEntry;

    #[test]
    fn test_first_run_report() {
        let report = ChangeReport::new(None);
        assert_eq!(report.lines(), vec!["First run - no previous data to compare"]);
    }

    #[test]
    fn test_loss_report() {
        let result = DiffResult {
            added: vec![],
            removed: vec![FollowerEntry::new("Alice", "alice"), FollowerEntry::new("Bob", "bob")],
            added_count: 0,
            removed_count: 2,
        };
        let text = ChangeReport::new(Some(&result))
            .with_previous_timestamp("2024-01-01T00:00:00")
            .to_string();

        assert!(text.contains("Comparing with data from 2024-01-01T00:00:00"));
        assert!(text.contains("2 people unfollowed"));
        assert!(text.contains("  - Alice (@alice)"));
        assert!(text.contains("No new followers"));
        assert!(text.contains("Net loss: -2 followers"));
    }
}
