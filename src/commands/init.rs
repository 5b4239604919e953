//! Initialize a habit-view workspace

use std::fs;
use std::path::Path;

use habit_view::config::Config;
use habit_view::output::{OperationResult, OutputMode};

/// Write a default config and create the journal and report directories
pub fn init(
    workspace: &Path,
    config_path: &Path,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                config_path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let config = Config::for_workspace(workspace);
    let content = format!(
        "# habit-view configuration\n#\n\
         # Rows of markdown tables containing the marker are collected per habit.\n\
         # mode = \"monthly\" writes one report per period key instead of one file.\n\n{}",
        toml::to_string_pretty(&config)?
    );

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_path, content)?;
    fs::create_dir_all(config.input_dir())?;
    fs::create_dir_all(config.output_dir())?;

    OperationResult {
        success: true,
        message: format!(
            "Created {}\nCreated {}/\nCreated {}/",
            config_path.display(),
            config.input_dir().display(),
            config.output_dir().display()
        ),
    }
    .render(mode);
    Ok(())
}
