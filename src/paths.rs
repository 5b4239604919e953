//! Centralized path definitions for habit-view
//!
//! ## Workspace Layout
//!
//! ```text
//! workspace/
//! ├── habit-view.toml          # Optional config
//! ├── archive/                 # Journals (input)
//! │   └── 2024/
//! │       ├── 20240101.md
//! │       └── 20240102.md
//! └── view/                    # Reports (output)
//!     ├── habit.md             # single mode
//!     └── habit-2024.md        # monthly mode
//! ```
//!
//! In hosted automation the workspace is the checkout directory handed over
//! through `GITHUB_WORKSPACE`; locally it is the current directory.

use std::path::{Path, PathBuf};

/// Config filename looked up in the workspace root
pub const CONFIG_FILE: &str = "habit-view.toml";

/// Default journal directory
pub const INPUT_DIR: &str = "archive";

/// Default report directory
pub const OUTPUT_DIR: &str = "view";

/// Default consolidated report filename
pub const REPORT_FILE: &str = "habit.md";

/// Default per-period report filename prefix
pub const REPORT_PREFIX: &str = "habit-";

/// Environment variable carrying the workspace in hosted automation
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Get path to the config file of a workspace
#[must_use]
pub fn config_file(workspace: &Path) -> PathBuf {
    workspace.join(CONFIG_FILE)
}

/// Resolve `path` against `workspace` unless it is already absolute
#[must_use]
pub fn resolve(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}
