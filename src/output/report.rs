//! Combined console report.

use super::histogram::{render_histogram, HistogramConfig};
use super::ranking::{render_ranking_table, RankingConfig};
use crate::timeline::Timeline;

/// Render the histogram, a blank line, then the ranking table
///
/// **Public** - what the CLI prints to stdout
pub fn render_report(
    timeline: &Timeline,
    histogram: &HistogramConfig,
    ranking: &RankingConfig,
) -> String {
    format!(
        "{}\n{}",
        render_histogram(&timeline.samples, histogram),
        render_ranking_table(&timeline.intervals, ranking)
    )
}
