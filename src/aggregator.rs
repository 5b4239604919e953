//! Aggregator - merges per-file habit records into one
//!
//! Entries for the same habit are concatenated across files. Nothing is
//! deduplicated: two identical rows produce two entries. Order within a habit
//! only becomes meaningful once the report writer sorts it by source id.

use log::debug;

use crate::extractor::Extractor;
use crate::models::{HabitRecord, SourceFile};

/// Accumulates habit entries from many journals
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    extractor: Extractor,
    record: HabitRecord,
    files_seen: usize,
}

impl Aggregator {
    /// Create an aggregator that extracts with `extractor`
    #[must_use]
    pub const fn new(extractor: Extractor) -> Self {
        Self {
            extractor,
            record: HabitRecord::new(),
            files_seen: 0,
        }
    }

    /// Extract habits from a journal and merge them in
    pub fn add_file(&mut self, file: &SourceFile) {
        let found = self.extractor.extract_file(file);
        debug!(
            "{}: {} habit row(s) in {} habit(s)",
            file.path.display(),
            found.entry_count(),
            found.len()
        );
        self.files_seen += 1;
        self.record.merge(found);
    }

    /// Merge an already extracted record
    pub fn merge(&mut self, record: HabitRecord) {
        self.record.merge(record);
    }

    /// Number of files passed to `add_file`
    #[must_use]
    pub const fn files_seen(&self) -> usize {
        self.files_seen
    }

    /// The record collected so far
    #[must_use]
    pub const fn record(&self) -> &HabitRecord {
        &self.record
    }

    /// Finish and take the collected record
    #[must_use]
    pub fn into_record(self) -> HabitRecord {
        self.record
    }
}

/// Merge per-file records into one
#[must_use]
pub fn aggregate<I>(records: I) -> HabitRecord
where
    I: IntoIterator<Item = HabitRecord>,
{
    let mut aggregator = Aggregator::default();
    for record in records {
        aggregator.merge(record);
    }
    aggregator.into_record()
}
