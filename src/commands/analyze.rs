//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the log file
//! 2. Extracts start/end events
//! 3. Builds the timeline
//! 4. Renders the histogram and ranking table

use super::models::AnalyzeArgs;
use crate::output::render_report;
use crate::parser::parse_log_file;
use crate::timeline::{build_timeline, calculate_timeline_stats};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the analyze command and return the text to print
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid histogram or ranking options
/// * Missing or unreadable log file
///
/// A log with no recognizable events is not an error; the report is then
/// an empty histogram followed by an empty table.
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<String> {
    let start_time = Instant::now();

    validate_args(args)?;

    info!("Analyzing pabot log: {}", args.log_file.display());

    let events = parse_log_file(&args.log_file)
        .with_context(|| format!("Failed to load log file {}", args.log_file.display()))?;

    let timeline = build_timeline(&events);
    if timeline.is_empty() {
        info!("No test start/end markers found in {}", args.log_file.display());
    }

    let stats = calculate_timeline_stats(&timeline);
    info!("{}", stats.summary());

    if stats.unterminated > 0 {
        warn!(
            "{} tests never finished and are excluded from the ranking",
            stats.unterminated
        );
        debug!("Unfinished: {}", timeline.unterminated.join(", "));
    }
    if stats.orphan_ends > 0 {
        debug!("{} end markers had no matching start", stats.orphan_ends);
    }

    let mut report = render_report(&timeline, &args.histogram, &args.ranking);
    if args.print_summary {
        report.push('\n');
        report.push_str(&stats.summary());
        report.push('\n');
    }

    debug!("Analysis completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    args.histogram
        .validate()
        .context("Invalid histogram options")?;
    args.ranking.validate().context("Invalid ranking options")?;

    Ok(())
}
