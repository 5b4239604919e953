//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use habit_view::output::{OperationResult, OutputMode, RunSummary};

fn summary(reports: Vec<PathBuf>, dry_run: bool) -> RunSummary {
    RunSummary {
        files_scanned: 2,
        habits: 1,
        entries: 2,
        reports,
        dry_run,
    }
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn run_summary_serialization() {
    let json = serde_json::to_value(summary(vec![PathBuf::from("view/habit.md")], false)).unwrap();

    assert_eq!(json["files_scanned"], 2);
    assert_eq!(json["habits"], 1);
    assert_eq!(json["entries"], 2);
    assert_eq!(json["reports"][0], "view/habit.md");
    assert_eq!(json["dry_run"], false);
}

#[test]
fn run_summary_human_lists_reports() {
    let text = summary(vec![PathBuf::from("view/habit.md")], false).to_human();
    assert!(text.contains("Scanned 2 journal(s): 1 habit(s), 2 entries."));
    assert!(text.contains("Wrote view/habit.md"));
}

#[test]
fn run_summary_human_dry_run() {
    let text = summary(vec![PathBuf::from("view/habit.md")], true).to_human();
    assert!(text.contains("Would write view/habit.md"));
}

#[test]
fn run_summary_human_without_reports() {
    let text = summary(vec![], false).to_human();
    assert!(text.contains("No reports to write."));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created habit-view.toml".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Created habit-view.toml"));
}
