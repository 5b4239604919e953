//! Tests for the scan-and-write pipeline

use std::fs;

use habit_view::HabitError;
use habit_view::pipeline::{collect, preview, run};
use habit_view::report::GroupMode;

use crate::common::{TestWorkspace, journal};

#[test]
fn two_journals_give_one_block() {
    let ws = TestWorkspace::new();
    ws.add_journal("20240102.md", &journal(&[("Reading", "O")]));
    ws.add_journal("20240101.md", &journal(&[("Reading", "X")]));

    let summary = run(&ws.config()).unwrap();

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.habits, 1);
    assert_eq!(summary.entries, 2);
    assert_eq!(summary.reports, vec![ws.view().join("habit.md")]);
    assert_eq!(
        ws.read_view("habit.md"),
        "# Reading\n| date | done |\n|--|--|\n| 20240101 | X |\n| 20240102 | O |\n\n"
    );
}

#[test]
fn rerun_is_byte_identical() {
    let ws = TestWorkspace::new();
    ws.add_journal("2024/01/20240101.md", &journal(&[("Reading", "X"), ("Running", "O")]));
    ws.add_journal("2024/01/20240102.md", &journal(&[("Water", "8"), ("Reading", "O")]));
    ws.add_journal("2023/20231231.md", &journal(&[("Running", "X")]));

    run(&ws.config()).unwrap();
    let first = ws.read_view("habit.md");
    run(&ws.config()).unwrap();
    let second = ws.read_view("habit.md");

    assert_eq!(first, second);
    assert!(first.starts_with("# Reading\n"));
}

#[test]
fn empty_archive_writes_empty_report() {
    let ws = TestWorkspace::new();
    fs::write(ws.view().join("habit.md"), "# Old\n").unwrap();

    let summary = run(&ws.config()).unwrap();

    assert_eq!(summary.files_scanned, 0);
    assert_eq!(ws.read_view("habit.md"), "");
}

#[test]
fn missing_archive_is_error() {
    let ws = TestWorkspace::new();
    let mut config = ws.config();
    config.paths.input = "does-not-exist".into();

    assert!(matches!(run(&config), Err(HabitError::RootNotFound(_))));
}

#[test]
fn monthly_mode_writes_one_file_per_key() {
    let ws = TestWorkspace::new();
    ws.add_journal("20231231.md", &journal(&[("Reading", "X")]));
    ws.add_journal("20240101.md", &journal(&[("Reading", "O"), ("Running", "O")]));

    let mut config = ws.config();
    config.report.mode = GroupMode::Monthly;
    let summary = run(&config).unwrap();

    assert_eq!(
        summary.reports,
        vec![ws.view().join("habit-2023.md"), ws.view().join("habit-2024.md")]
    );
    assert_eq!(
        ws.read_view("habit-2024.md"),
        "# Reading\n| date | done |\n|--|--|\n| 20240101 | O |\n\n\
         # Running\n| date | done |\n|--|--|\n| 20240101 | O |\n\n"
    );
}

#[test]
fn non_markdown_files_ignored() {
    let ws = TestWorkspace::new();
    ws.add_journal("20240101.txt", &journal(&[("Reading", "X")]));
    ws.add_journal("20240102.md", &journal(&[("Reading", "O")]));

    let collected = collect(&ws.config()).unwrap();
    assert_eq!(collected.files_scanned, 1);
    assert_eq!(collected.record.entry_count(), 1);
}

#[test]
fn preview_does_not_write() {
    let ws = TestWorkspace::new();
    ws.add_journal("20240101.md", &journal(&[("Reading", "X")]));

    let (reports, summary) = preview(&ws.config()).unwrap();

    assert!(summary.dry_run);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].content.contains("| 20240101 | X |"));
    assert!(!ws.view().join("habit.md").exists());
}

#[test]
fn invalid_config_rejected_before_scanning() {
    let ws = TestWorkspace::new();
    let mut config = ws.config();
    config.extract.marker = String::new();

    assert!(matches!(collect(&config), Err(HabitError::InvalidConfig(_))));
}

#[test]
fn excluded_journals_skipped() {
    let ws = TestWorkspace::new();
    ws.add_journal("templates/daily.md", &journal(&[("Template", "-")]));
    ws.add_journal("20240101.md", &journal(&[("Reading", "O")]));

    let mut config = ws.config();
    config.walk.exclude = vec!["templates".to_string()];
    let collected = collect(&config).unwrap();

    assert_eq!(collected.record.names().collect::<Vec<_>>(), vec!["Reading"]);
}

/// A `.md` entry that cannot be read: a symlink pointing nowhere
#[cfg(unix)]
fn add_dangling_journal(ws: &TestWorkspace, name: &str) {
    std::os::unix::fs::symlink(ws.path().join("missing-target.md"), ws.archive().join(name))
        .unwrap();
}

#[test]
#[cfg(unix)]
fn unreadable_journal_aborts_run() {
    let ws = TestWorkspace::new();
    ws.add_journal("20240101.md", &journal(&[("Reading", "X")]));
    add_dangling_journal(&ws, "20240102.md");

    let result = run(&ws.config());

    assert!(matches!(result, Err(HabitError::Walk(_))));
    assert!(!ws.view().join("habit.md").exists());
}

#[test]
#[cfg(unix)]
fn unreadable_journal_skipped_when_configured() {
    let ws = TestWorkspace::new();
    ws.add_journal("20240101.md", &journal(&[("Reading", "X")]));
    add_dangling_journal(&ws, "20240102.md");

    let mut config = ws.config();
    config.walk.skip_unreadable = true;
    let collected = collect(&config).unwrap();

    assert_eq!(collected.files_scanned, 1);
    assert_eq!(collected.record.entry_count(), 1);
}
