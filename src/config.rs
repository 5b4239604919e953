//! Run configuration
//!
//! Everything the pipeline needs is carried in a [`Config`] value handed to
//! [`crate::pipeline::run`]. It can be loaded from `habit-view.toml` in the
//! workspace root; every field has a default, so the file is optional and may
//! be partial:
//!
//! ```toml
//! [paths]
//! input = "archive"
//! output = "view"
//!
//! [report]
//! mode = "monthly"
//! period_key_len = 6
//!
//! [extract]
//! marker = "[habit]"
//!
//! [walk]
//! exclude = ["templates/**"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{HabitError, Result};
use crate::extractor::{DEFAULT_MARKER, Extractor};
use crate::paths;
use crate::report::{GroupMode, ReportWriter};
use crate::walker::Walker;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory relative paths resolve against
    #[serde(skip)]
    pub workspace: PathBuf,
    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,
    /// Report layout
    #[serde(default)]
    pub report: ReportConfig,
    /// Habit row detection
    #[serde(default)]
    pub extract: ExtractConfig,
    /// Journal discovery
    #[serde(default)]
    pub walk: WalkConfig,
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Journal directory
    pub input: PathBuf,
    /// Report directory
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(paths::INPUT_DIR),
            output: PathBuf::from(paths::OUTPUT_DIR),
        }
    }
}

/// Report layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Single consolidated report or one per period
    pub mode: GroupMode,
    /// Consolidated report filename
    pub file_name: String,
    /// Per-period report filename prefix
    pub file_prefix: String,
    /// Leading source id characters forming the period key
    pub period_key_len: usize,
    /// Label of the date column
    pub date_label: String,
    /// Label of the status column
    pub done_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let writer = ReportWriter::default();
        Self {
            mode: writer.mode,
            file_name: writer.file_name,
            file_prefix: writer.file_prefix,
            period_key_len: writer.period_key_len,
            date_label: writer.date_label,
            done_label: writer.done_label,
        }
    }
}

/// Habit row detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Marker tagging a table row as a habit row
    pub marker: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// Journal discovery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Warn and continue past unreadable files instead of aborting
    pub skip_unreadable: bool,
    /// Glob patterns, relative to the input directory, to leave out
    pub exclude: Vec<String>,
}

impl Config {
    /// Default configuration rooted at `workspace`
    #[must_use]
    pub fn for_workspace(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            ..Self::default()
        }
    }

    /// Load a config file; relative paths in it resolve against `workspace`
    pub fn load(path: &Path, workspace: impl Into<PathBuf>) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| HabitError::read(path, e))?;
        let mut config: Self = toml::from_str(&content).map_err(|source| HabitError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.workspace = workspace.into();
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `habit-view.toml` from the workspace, or use defaults if it is absent
    pub fn load_workspace(workspace: impl Into<PathBuf>) -> Result<Self> {
        let workspace = workspace.into();
        let path = paths::config_file(&workspace);
        if path.exists() {
            Self::load(&path, workspace)
        } else {
            Ok(Self::for_workspace(workspace))
        }
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.extract.marker.trim().is_empty() {
            return Err(HabitError::InvalidConfig("marker must not be empty".to_string()));
        }
        if self.report.period_key_len == 0 {
            return Err(HabitError::InvalidConfig(
                "period_key_len must be at least 1".to_string(),
            ));
        }
        if self.report.file_name.is_empty() {
            return Err(HabitError::InvalidConfig("file_name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Journal directory resolved against the workspace
    #[must_use]
    pub fn input_dir(&self) -> PathBuf {
        paths::resolve(&self.workspace, &self.paths.input)
    }

    /// Report directory resolved against the workspace
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        paths::resolve(&self.workspace, &self.paths.output)
    }

    /// Extractor for the configured marker
    #[must_use]
    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.extract.marker.clone())
    }

    /// Report writer for the configured layout
    #[must_use]
    pub fn report_writer(&self) -> ReportWriter {
        let report = &self.report;
        ReportWriter {
            mode: report.mode,
            date_label: report.date_label.clone(),
            done_label: report.done_label.clone(),
            file_name: report.file_name.clone(),
            file_prefix: report.file_prefix.clone(),
            period_key_len: report.period_key_len,
        }
    }

    /// Walker over the input directory
    pub fn walker(&self) -> Result<Walker> {
        Ok(Walker::new(self.input_dir())?
            .with_exclude(&self.walk.exclude)?
            .skip_unreadable(self.walk.skip_unreadable))
    }
}
