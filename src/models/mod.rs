//! Data models for habit collection
//!
//! Core abstractions:
//! - `HabitEntry`: "on day X, habit Y had status Z"
//! - `HabitRecord`: every entry grouped by habit name
//! - `SourceFile`: one journal file and the identifier derived from its name

mod entry;
mod record;
mod source;

pub use entry::HabitEntry;
pub use record::HabitRecord;
pub use source::{SourceFile, source_id};
