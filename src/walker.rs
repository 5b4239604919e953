//! Walker - finds markdown journals under an input directory
//!
//! The walker descends the input tree and yields every regular file whose
//! extension is exactly `md`. Hidden directories (names starting with `.`) and
//! paths matching an exclude pattern are skipped. Paths come out in sorted
//! order so repeated runs read files in the same sequence.
//!
//! # Examples
//!
//! ```no_run
//! use habit_view::walker::Walker;
//!
//! let walker = Walker::new("archive").unwrap();
//! for path in walker.markdown_files() {
//!     println!("{}", path.unwrap().display());
//! }
//! ```

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{HabitError, Result};

/// Extension of journal files (case-sensitive)
pub const MARKDOWN_EXT: &str = "md";

/// Recursive markdown file finder
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root directory to walk
    root: PathBuf,

    /// Patterns (relative to root) to leave out
    exclude: Vec<Pattern>,

    /// Log and continue past unreadable entries instead of failing
    skip_unreadable: bool,
}

impl Walker {
    /// Create a walker rooted at `root`
    ///
    /// Fails if the root does not exist or is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(HabitError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(HabitError::NotADirectory(root));
        }

        Ok(Self {
            root,
            exclude: Vec::new(),
            skip_unreadable: false,
        })
    }

    /// Leave out paths matching any of these glob patterns
    pub fn with_exclude<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in patterns {
            let raw = raw.as_ref();
            let pattern =
                Pattern::new(raw).map_err(|e| HabitError::InvalidPattern(format!("{raw}: {e}")))?;
            self.exclude.push(pattern);
        }
        Ok(self)
    }

    /// Skip unreadable entries with a warning rather than aborting
    #[must_use]
    pub const fn skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield markdown files under the root
    ///
    /// Directories are traversed but never yielded. Without `skip_unreadable`
    /// the first walk error is yielded and the caller is expected to stop.
    pub fn markdown_files(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        let root = &self.root;

        WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| {
                e.path() == root || !(is_hidden_dir(e) || self.is_excluded(e.path()))
            })
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file() && is_markdown(path) {
                        debug!("found journal {}", path.display());
                        Some(Ok(entry.into_path()))
                    } else {
                        None
                    }
                },
                Err(e) if self.skip_unreadable => {
                    warn!("skipping unreadable entry: {e}");
                    None
                },
                Err(e) => Some(Err(HabitError::Walk(e))),
            })
    }

    /// Collect all markdown files, stopping at the first error
    pub fn find_files(&self) -> Result<Vec<PathBuf>> {
        self.markdown_files().collect()
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude.iter().any(|p| p.matches_path(relative))
    }
}

/// Whether `path` has the exact `md` extension
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXT)
}

/// Check if an entry is a hidden directory (starts with .)
fn is_hidden_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
