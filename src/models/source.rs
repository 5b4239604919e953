//! Source file model

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HabitError, Result};

/// A journal file read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Where the file was read from
    pub path: PathBuf,

    /// File name without extension; used as the date column in reports
    pub id: String,

    /// Full text of the file
    pub content: String,
}

impl SourceFile {
    /// Build a source file from an in-memory text
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let id = source_id(&path);
        Self {
            path,
            id,
            content: content.into(),
        }
    }

    /// Read a journal file from disk
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| HabitError::read(path, e))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(path, content))
    }
}

/// Derive the identifier of a journal from its path (`archive/2024/20240101.md` -> `20240101`)
#[must_use]
pub fn source_id(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}
