//! Scan journals and write reports

use anyhow::Context;
use habit_view::config::Config;
use habit_view::output::OutputMode;
use habit_view::pipeline;

/// Run the pipeline, or only render the reports when `dry_run` is set
pub fn scan(config: &Config, dry_run: bool, mode: OutputMode) -> anyhow::Result<()> {
    if !dry_run {
        let summary = pipeline::run(config)
            .with_context(|| format!("scanning {}", config.input_dir().display()))?;
        summary.render(mode);
        return Ok(());
    }

    let (reports, summary) = pipeline::preview(config)
        .with_context(|| format!("scanning {}", config.input_dir().display()))?;

    match mode {
        OutputMode::Human => {
            for report in &reports {
                println!("==> {} <==", report.path.display());
                print!("{}", report.content);
            }
            println!("{}", summary.to_human());
        },
        OutputMode::Json => {
            let documents: Vec<_> = reports
                .iter()
                .map(|r| serde_json::json!({ "path": r.path, "content": r.content }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "summary": summary,
                    "documents": documents,
                }))?
            );
        },
    }
    Ok(())
}
