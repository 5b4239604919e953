//! Error types for scanning journals and writing reports

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting habits
#[derive(Debug, Error)]
pub enum HabitError {
    /// Input root does not exist
    #[error("input directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Input root is a file, not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A journal file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A report file or directory could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Error walking the directory tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Config file could not be parsed
    #[error("invalid config {path}: {source}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },

    /// Config values that cannot work together
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Exclude pattern is not a valid glob
    #[error("invalid exclude pattern: {0}")]
    InvalidPattern(String),
}

impl HabitError {
    /// Build a read error for `path`
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Build a write error for `path`
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, HabitError>;
