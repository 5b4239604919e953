//! Habit table extraction
//!
//! Journals embed habit trackers as ordinary markdown pipe tables. A row is a
//! habit row when one of its cells carries the habit marker (`[습관]` by default):
//!
//! ```text
//! | kind    | habit   | done |
//! |---------|---------|------|
//! | [습관]  | Reading | O    |
//! | [습관]Running | X |
//! ```
//!
//! The marker is either a cell of its own, in which case the habit name is the
//! next cell and the status the one after, or a prefix of the name cell, in
//! which case the status is the next cell.
//!
//! # Examples
//!
//! ```
//! use habit_view::extractor::Extractor;
//!
//! let text = "| a | b |\n|--|--|\n| [habit]Reading | X |\n";
//! let record = Extractor::new("[habit]").extract(text, "20240101");
//! assert_eq!(record.get("Reading").unwrap()[0].status, "X");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::models::{HabitEntry, HabitRecord, SourceFile};

/// Marker used by the journals this tool was written for
pub const DEFAULT_MARKER: &str = "[습관]";

/// Header row, separator row, then any number of body rows
static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*\|.+\|[ \t]*\n[ \t]*\|[-|: \t]+\|[ \t]*\n(?:[ \t]*\|.*\|[ \t]*\n)*",
    )
    .expect("table pattern is valid")
});

/// Extracts habit rows from markdown text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    marker: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Extractor {
    /// Create an extractor that looks for `marker`
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The marker this extractor matches
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Extract every habit row in `text`, tagging entries with `source_id`
    ///
    /// Text without any table yields an empty record. Rows are kept in the
    /// order they appear.
    #[must_use]
    pub fn extract(&self, text: &str, source_id: &str) -> HabitRecord {
        let text = normalize(text);
        let mut record = HabitRecord::new();

        for block in TABLE_RE.find_iter(&text) {
            for row in block.as_str().lines().filter(|l| is_table_row(l)) {
                if !row.contains(self.marker.as_str()) {
                    continue;
                }
                if let Some((habit, status)) = self.parse_row(row) {
                    record.push(habit, HabitEntry::new(source_id, status));
                }
            }
        }

        record
    }

    /// Extract habit rows from a journal file
    #[must_use]
    pub fn extract_file(&self, file: &SourceFile) -> HabitRecord {
        self.extract(&file.content, &file.id)
    }

    /// Split a tagged row into `(habit, status)`
    ///
    /// Returns `None` when the row has fewer than four pipe-delimited fields,
    /// lacks a name or status cell, or the name is empty.
    fn parse_row(&self, row: &str) -> Option<(String, String)> {
        let fields: Vec<&str> = row.trim().split('|').collect();
        if fields.len() < 4 {
            return None;
        }
        let cells = &fields[1..fields.len() - 1];

        let pos = cells.iter().position(|c| c.contains(self.marker.as_str()))?;
        let inline = cells[pos].replacen(self.marker.as_str(), "", 1);
        let inline = inline.trim();

        let (habit, status) = if inline.is_empty() {
            (*cells.get(pos + 1)?, *cells.get(pos + 2)?)
        } else {
            (inline, *cells.get(pos + 1)?)
        };

        let habit = habit.trim();
        if habit.is_empty() {
            return None;
        }

        Some((habit.to_string(), sanitize(status.trim())))
    }
}

/// Remove every non-printable character, keeping printable non-ASCII text
///
/// ```
/// assert_eq!(habit_view::extractor::sanitize("✓\u{7}done"), "✓done");
/// ```
#[must_use]
pub fn sanitize(s: &str) -> String {
    s.chars().filter(|&c| is_printable(c)).collect()
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space
///
/// Control, format, private-use, surrogate, unassigned and separator
/// characters are not printable.
#[must_use]
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// LF line endings and a trailing newline so the last row of a file still matches
fn normalize(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n");
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn is_table_row(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}
