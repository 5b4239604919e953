//! Scan-and-write pipeline
//!
//! Walk the input directory, extract habit rows from every journal, merge
//! them, then render the reports. The whole run is a single sequential pass;
//! the first unrecoverable I/O error aborts it.

use log::{info, warn};

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HabitRecord, SourceFile};
use crate::output::RunSummary;
use crate::report::Report;

/// Habits collected from an input directory
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Every habit entry found
    pub record: HabitRecord,
    /// Number of journals read
    pub files_scanned: usize,
}

/// Read every journal under the configured input directory
pub fn collect(config: &Config) -> Result<Collected> {
    config.validate()?;
    let walker = config.walker()?;
    let mut aggregator = Aggregator::new(config.extractor());

    for path in walker.markdown_files() {
        let path = path?;
        match SourceFile::read(&path) {
            Ok(file) => aggregator.add_file(&file),
            Err(e) if config.walk.skip_unreadable => warn!("skipping journal: {e}"),
            Err(e) => return Err(e),
        }
    }

    let files_scanned = aggregator.files_seen();
    let record = aggregator.into_record();
    info!(
        "scanned {files_scanned} journal(s): {} habit(s), {} entries",
        record.len(),
        record.entry_count()
    );

    Ok(Collected {
        record,
        files_scanned,
    })
}

/// Collect habits and render the reports without touching the output directory
pub fn preview(config: &Config) -> Result<(Vec<Report>, RunSummary)> {
    let collected = collect(config)?;
    let reports = config.report_writer().reports(&collected.record, &config.output_dir());
    let summary = RunSummary::new(
        &collected,
        reports.iter().map(|r| r.path.clone()).collect(),
        true,
    );
    Ok((reports, summary))
}

/// Collect habits and write the reports
pub fn run(config: &Config) -> Result<RunSummary> {
    let collected = collect(config)?;
    let written = config.report_writer().write(&collected.record, &config.output_dir())?;
    Ok(RunSummary::new(&collected, written, false))
}
