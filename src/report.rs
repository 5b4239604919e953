//! Report writer - renders collected habits as markdown
//!
//! Each habit becomes a heading followed by a two-column table of
//! `source id | status`, entries sorted by source id:
//!
//! ```text
//! # Reading
//! | 날짜 | 완료여부 |
//! |--|--|
//! | 20240101 | X |
//! | 20240102 | O |
//!
//! ```
//!
//! Habits are ordered by name. Output files are truncated before writing, so a
//! re-run over unchanged journals produces identical bytes.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{HabitError, Result};
use crate::models::{HabitEntry, HabitRecord};
use crate::paths;

/// How entries are grouped into output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    /// One consolidated report
    #[default]
    Single,
    /// One report per period key (leading characters of the source id)
    Monthly,
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("Invalid mode: {s}. Use: single, monthly")),
        }
    }
}

/// A rendered report and where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Destination file
    pub path: PathBuf,
    /// Markdown text
    pub content: String,
}

/// Renders and writes habit reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWriter {
    /// Grouping of entries into files
    pub mode: GroupMode,
    /// Header label of the source id column
    pub date_label: String,
    /// Header label of the status column
    pub done_label: String,
    /// File name of the consolidated report
    pub file_name: String,
    /// File name prefix of per-period reports (`habit-` gives `habit-2024.md`)
    pub file_prefix: String,
    /// Number of leading source id characters forming the period key
    pub period_key_len: usize,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            mode: GroupMode::Single,
            date_label: "날짜".to_string(),
            done_label: "완료여부".to_string(),
            file_name: paths::REPORT_FILE.to_string(),
            file_prefix: paths::REPORT_PREFIX.to_string(),
            period_key_len: 4,
        }
    }
}

impl ReportWriter {
    /// Use the given column labels
    #[must_use]
    pub fn with_labels(mut self, date: impl Into<String>, done: impl Into<String>) -> Self {
        self.date_label = date.into();
        self.done_label = done.into();
        self
    }

    /// Use the given grouping mode
    #[must_use]
    pub const fn with_mode(mut self, mode: GroupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Render every habit of `record` into a single document
    #[must_use]
    pub fn render(&self, record: &HabitRecord) -> String {
        let mut out = String::new();
        for (habit, entries) in record.habits() {
            self.render_habit(&mut out, habit, entries);
        }
        out
    }

    /// Render one document per period key, keyed and ordered by that key
    #[must_use]
    pub fn render_periods(&self, record: &HabitRecord) -> BTreeMap<String, String> {
        group_by_period(record, self.period_key_len)
            .into_iter()
            .map(|(key, part)| (key, self.render(&part)))
            .collect()
    }

    /// Render the reports for `record` with their destinations under `output_dir`
    #[must_use]
    pub fn reports(&self, record: &HabitRecord, output_dir: &Path) -> Vec<Report> {
        match self.mode {
            GroupMode::Single => vec![Report {
                path: output_dir.join(&self.file_name),
                content: self.render(record),
            }],
            GroupMode::Monthly => self
                .render_periods(record)
                .into_iter()
                .map(|(key, content)| Report {
                    path: output_dir.join(format!("{}{key}.md", self.file_prefix)),
                    content,
                })
                .collect(),
        }
    }

    /// Render and write all reports, returning the files written
    ///
    /// Any write failure aborts the remaining reports.
    pub fn write(&self, record: &HabitRecord, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for report in self.reports(record, output_dir) {
            write_report(&report)?;
            info!("wrote {}", report.path.display());
            written.push(report.path);
        }
        Ok(written)
    }

    fn render_habit(&self, out: &mut String, habit: &str, entries: &[HabitEntry]) {
        let mut sorted = entries.to_vec();
        sorted.sort_by(|a, b| a.source_id.cmp(&b.source_id));

        let _ = writeln!(out, "# {habit}");
        let _ = writeln!(out, "| {} | {} |", self.date_label, self.done_label);
        out.push_str("|--|--|\n");
        for entry in &sorted {
            let _ = writeln!(out, "| {} | {} |", entry.source_id, entry.status);
        }
        out.push('\n');
    }
}

/// Split a record by the first `key_len` characters of each entry's source id
#[must_use]
pub fn group_by_period(record: &HabitRecord, key_len: usize) -> BTreeMap<String, HabitRecord> {
    let mut periods: BTreeMap<String, HabitRecord> = BTreeMap::new();
    for (habit, entries) in record.habits() {
        for entry in entries {
            periods
                .entry(entry.period_key(key_len).to_string())
                .or_default()
                .push(habit, entry.clone());
        }
    }
    periods
}

/// Truncate and write one report, creating its directory if needed
pub fn write_report(report: &Report) -> Result<()> {
    let path = &report.path;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| HabitError::write(parent, e))?;
    }

    let file = File::create(path).map_err(|e| HabitError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(report.content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| HabitError::write(path, e))
}
