//! pabotscope CLI
//!
//! Prints a worker-concurrency histogram and the longest-running tests for a
//! pabot console log.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use pabotscope::commands::{execute_analyze, AnalyzeArgs};
use pabotscope::output::{HistogramConfig, RankingConfig};
use pabotscope::utils::config::{
    DEFAULT_BLOCK, DEFAULT_BUCKET_SECONDS, DEFAULT_HISTOGRAM_WIDTH, DEFAULT_NAME_WIDTH,
    DEFAULT_TOP_N,
};

/// pabotscope - worker usage and slowest tests from pabot output
#[derive(Parser, Debug)]
#[command(name = "pabotscope")]
#[command(version, about, long_about = None)]
struct Cli {
    /// pabot console log to analyze
    log_file: PathBuf,

    /// Number of longest-running tests to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Maximum histogram width in columns
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_WIDTH)]
    width: usize,

    /// Scale the histogram down to at most this many rows
    #[arg(long)]
    height: Option<usize>,

    /// Seconds of run time per histogram column
    #[arg(long, default_value_t = DEFAULT_BUCKET_SECONDS)]
    bucket: f64,

    /// Character used to draw histogram bars
    #[arg(long, default_value_t = DEFAULT_BLOCK)]
    block: char,

    /// Width of the test name column
    #[arg(long, default_value_t = DEFAULT_NAME_WIDTH)]
    name_width: usize,

    /// Print a one-line run summary after the table
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        log_file: cli.log_file,
        histogram: HistogramConfig::new()
            .with_bucket_seconds(cli.bucket)
            .with_max_width(cli.width)
            .with_max_height(cli.height)
            .with_block(cli.block),
        ranking: RankingConfig::new()
            .with_top_n(cli.top)
            .with_name_width(cli.name_width),
        print_summary: cli.summary,
    };

    let report = execute_analyze(&args)?;
    print!("{}", report);

    Ok(())
}
