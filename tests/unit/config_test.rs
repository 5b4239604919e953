//! Tests for run configuration

use std::fs;
use std::path::{Path, PathBuf};

use habit_view::HabitError;
use habit_view::config::Config;
use habit_view::report::GroupMode;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.paths.input, PathBuf::from("archive"));
    assert_eq!(config.paths.output, PathBuf::from("view"));
    assert_eq!(config.report.mode, GroupMode::Single);
    assert_eq!(config.report.file_prefix, "habit-");
    assert_eq!(config.report.file_name, "habit.md");
    assert_eq!(config.report.period_key_len, 4);
    assert_eq!(config.extract.marker, "[습관]");
    assert!(!config.walk.skip_unreadable);
    assert!(config.validate().is_ok());
}

#[test]
fn test_paths_resolve_against_workspace() {
    let config = Config::for_workspace("/work");
    assert_eq!(config.input_dir(), Path::new("/work/archive"));
    assert_eq!(config.output_dir(), Path::new("/work/view"));
}

#[test]
fn test_absolute_paths_kept() {
    let mut config = Config::for_workspace("/work");
    config.paths.output = PathBuf::from("/srv/site");
    assert_eq!(config.output_dir(), Path::new("/srv/site"));
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_partial_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("habit-view.toml"),
        "[paths]\ninput = \"archieve\"\n\n[report]\nmode = \"monthly\"\n",
    )
    .unwrap();

    let config = Config::load_workspace(temp.path()).unwrap();
    assert_eq!(config.input_dir(), temp.path().join("archieve"));
    assert_eq!(config.output_dir(), temp.path().join("view"));
    assert_eq!(config.report.mode, GroupMode::Monthly);
    assert_eq!(config.report.date_label, "날짜");
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_workspace(temp.path()).unwrap();
    assert_eq!(config, Config::for_workspace(temp.path()));
}

#[test]
fn test_invalid_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("habit-view.toml");
    fs::write(&path, "[report]\nmode = \"weekly\"\n").unwrap();

    let err = Config::load(&path, temp.path()).unwrap_err();
    assert!(matches!(err, HabitError::Config { .. }));
}

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("habit-view.toml");

    let mut config = Config::for_workspace(temp.path());
    config.walk.exclude = vec!["templates/**".to_string()];
    config.extract.marker = "[habit]".to_string();
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = Config::load(&path, temp.path()).unwrap();
    assert_eq!(loaded, config);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_empty_marker_rejected() {
    let mut config = Config::default();
    config.extract.marker = "  ".to_string();
    assert!(matches!(config.validate(), Err(HabitError::InvalidConfig(_))));
}

#[test]
fn test_zero_key_len_rejected() {
    let mut config = Config::default();
    config.report.period_key_len = 0;
    assert!(matches!(config.validate(), Err(HabitError::InvalidConfig(_))));
}

#[test]
fn test_report_writer_follows_config() {
    let mut config = Config::default();
    config.report.mode = GroupMode::Monthly;
    config.report.file_prefix = "log-".to_string();

    let writer = config.report_writer();
    assert_eq!(writer.mode, GroupMode::Monthly);
    assert_eq!(writer.file_prefix, "log-");
    assert_eq!(config.extractor().marker(), "[습관]");
}
