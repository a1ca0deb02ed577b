//! Report rendering (colored text and JSON)

use crate::domain::{FreshnessStatus, ReconciliationReport};
use colored::Colorize;
use std::io::Write;

/// Renders the human-readable report
///
/// The default view prints only the verdict: a green all-clear or the
/// red outdated list. Verbose mode prints every classification first,
/// unresolved entries included.
pub fn render_text(
    report: &ReconciliationReport,
    verbose: bool,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    if verbose {
        for classification in &report.classifications {
            let line = classification.to_string();
            let line = match classification.status {
                FreshnessStatus::UpToDate => line.green(),
                FreshnessStatus::Outdated => line.red(),
                FreshnessStatus::Unresolved => line.yellow(),
            };
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer)?;
    }

    if report.is_fresh() {
        writeln!(writer, "{}", "All dependencies are up to date.".green())?;
    } else {
        writeln!(
            writer,
            "{}",
            "The following dependencies are outdated:".red()
        )?;
        for line in &report.outdated {
            writeln!(writer, " - {}", line.red())?;
        }
    }

    Ok(())
}

/// Renders the report as pretty-printed JSON
pub fn render_json(
    report: &ReconciliationReport,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}
