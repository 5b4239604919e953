//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use habit_view::config::Config;
use habit_view::output::OutputMode;
use habit_view::paths;
use habit_view::report::GroupMode;

/// habit-view - Habit history from markdown journals
#[derive(Parser, Debug)]
#[command(
    name = "habit-view",
    version,
    about = "Habit history from markdown journals",
    long_about = "Collect habit tracker tables from markdown journals.\n\n\
                  Table rows tagged with the habit marker are gathered from every\n\
                  journal and written out as one history table per habit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Workspace root that relative input/output paths resolve against
    #[arg(short, long, global = true, env = paths::WORKSPACE_ENV)]
    pub workspace: Option<PathBuf>,

    /// Config file (defaults to habit-view.toml in the workspace)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan journals and write habit reports (default)
    Scan(ScanArgs),

    /// Write a default habit-view.toml and create the journal/report directories
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Options overriding the config file for a scan
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Journal directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report grouping: single, monthly
    #[arg(short, long)]
    pub mode: Option<GroupMode>,

    /// Marker tagging habit rows
    #[arg(long)]
    pub marker: Option<String>,

    /// Warn and continue past unreadable journals
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Print the reports instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl ScanArgs {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.paths.input.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.paths.output.clone_from(output);
        }
        if let Some(mode) = self.mode {
            config.report.mode = mode;
        }
        if let Some(marker) = &self.marker {
            config.extract.marker.clone_from(marker);
        }
        if self.skip_unreadable {
            config.walk.skip_unreadable = true;
        }
    }
}

impl Cli {
    fn workspace(&self) -> PathBuf {
        self.workspace.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let workspace = self.workspace();
        let config = match &self.config {
            Some(path) => Config::load(path, workspace)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::load_workspace(workspace)?,
        };
        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match &cli.command {
        Some(Command::Scan(args)) => {
            let mut config = cli.load_config()?;
            args.apply(&mut config);
            commands::scan(&config, args.dry_run, output_mode)
        },
        None => {
            let config = cli.load_config()?;
            commands::scan(&config, false, output_mode)
        },
        Some(Command::Init { force }) => {
            let path = cli.config.clone().unwrap_or_else(|| paths::config_file(&cli.workspace()));
            commands::init(&cli.workspace(), &path, *force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("habit-view v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
