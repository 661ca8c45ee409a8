use crate::output::{HistogramConfig, RankingConfig};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// pabot console log to analyze
    pub log_file: PathBuf,

    /// Histogram rendering options
    pub histogram: HistogramConfig,

    /// Longest-tests table options
    pub ranking: RankingConfig,

    /// Print a one-line summary after the table
    pub print_summary: bool,
}
