//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::pipeline::Collected;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of journals read
    pub files_scanned: usize,
    /// Distinct habits found
    pub habits: usize,
    /// Habit entries found across all journals
    pub entries: usize,
    /// Reports written (or that would be written on a dry run)
    pub reports: Vec<PathBuf>,
    /// Whether reports were only rendered
    pub dry_run: bool,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl RunSummary {
    /// Summarize a collection and the reports produced from it
    #[must_use]
    pub fn new(collected: &Collected, reports: Vec<PathBuf>, dry_run: bool) -> Self {
        Self {
            files_scanned: collected.files_scanned,
            habits: collected.record.len(),
            entries: collected.record.entry_count(),
            reports,
            dry_run,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable summary text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Scanned {} journal(s): {} habit(s), {} entr{}.",
            self.files_scanned,
            self.habits,
            self.entries,
            if self.entries == 1 { "y" } else { "ies" }
        )];

        let verb = if self.dry_run { "Would write" } else { "Wrote" };
        if self.reports.is_empty() {
            lines.push("No reports to write.".to_string());
        }
        for path in &self.reports {
            lines.push(format!("  {verb} {}", path.display()));
        }
        lines.join("\n")
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
