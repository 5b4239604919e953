//! Habit record model
//!
//! Maps each habit name to the entries collected for it. Names are kept in a
//! `BTreeMap` so iteration is always lexicographic.

use std::collections::BTreeMap;

use serde::Serialize;

use super::HabitEntry;

/// Entries grouped by habit name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HabitRecord {
    habits: BTreeMap<String, Vec<HabitEntry>>,
}

impl HabitRecord {
    /// Create an empty record
    #[must_use]
    pub const fn new() -> Self {
        Self {
            habits: BTreeMap::new(),
        }
    }

    /// Append an entry to a habit, creating the habit if needed
    pub fn push(&mut self, habit: impl Into<String>, entry: HabitEntry) {
        self.habits.entry(habit.into()).or_default().push(entry);
    }

    /// Concatenate all entries of `other` onto this record
    pub fn merge(&mut self, other: Self) {
        for (habit, entries) in other.habits {
            self.habits.entry(habit).or_default().extend(entries);
        }
    }

    /// Entries of one habit, in insertion order
    #[must_use]
    pub fn get(&self, habit: &str) -> Option<&[HabitEntry]> {
        self.habits.get(habit).map(Vec::as_slice)
    }

    /// Habit names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.habits.keys().map(String::as_str)
    }

    /// Iterate `(habit, entries)` in lexicographic habit order
    pub fn habits(&self) -> impl Iterator<Item = (&str, &[HabitEntry])> {
        self.habits.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct habits
    #[must_use]
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    /// Whether no habit was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Total entries across all habits
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.habits.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, HabitEntry)> for HabitRecord {
    fn from_iter<I: IntoIterator<Item = (String, HabitEntry)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (habit, entry) in iter {
            record.push(habit, entry);
        }
        record
    }
}
