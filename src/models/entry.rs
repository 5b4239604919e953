//! Habit entry model
//!
//! One row of a habit table: the journal it came from and the status written there.

use serde::{Deserialize, Serialize};

/// A single habit status taken from one journal file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Journal identifier (file name without extension, e.g. `20240101`)
    pub source_id: String,

    /// Completion marker as written in the journal, sanitized
    pub status: String,
}

impl HabitEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(source_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            status: status.into(),
        }
    }

    /// Period key for per-period reports: the first `len` characters of the source id
    #[must_use]
    pub fn period_key(&self, len: usize) -> &str {
        match self.source_id.char_indices().nth(len) {
            Some((idx, _)) => &self.source_id[..idx],
            None => &self.source_id,
        }
    }
}
