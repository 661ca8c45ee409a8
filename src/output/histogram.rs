//! ASCII concurrency histogram.
//!
//! The time axis is quantized into fixed-width buckets, one column each.
//! Column height is the number of tests running in that bucket, drawn as a
//! top-aligned skyline:
//!
//! ```text
//!  ▓
//! ▓▓▓▓▓
//! ```

use crate::timeline::ConcurrencySample;
use crate::utils::config::{
    DEFAULT_BLOCK, DEFAULT_BUCKET_SECONDS, DEFAULT_HISTOGRAM_WIDTH, MAX_HISTOGRAM_WIDTH,
};
use crate::utils::error::ConfigError;
use log::debug;

/// Histogram configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramConfig {
    /// Seconds of run time per column
    pub bucket_seconds: f64,
    /// Buckets are widened so the chart never exceeds this many columns
    pub max_width: usize,
    /// Heights are scaled down proportionally when the peak exceeds this
    pub max_height: Option<usize>,
    pub block: char,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bucket_seconds: DEFAULT_BUCKET_SECONDS,
            max_width: DEFAULT_HISTOGRAM_WIDTH,
            max_height: None,
            block: DEFAULT_BLOCK,
        }
    }
}

impl HistogramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_seconds(mut self, seconds: f64) -> Self {
        self.bucket_seconds = seconds;
        self
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_max_height(mut self, height: Option<usize>) -> Self {
        self.max_height = height;
        self
    }

    pub fn with_block(mut self, block: char) -> Self {
        self.block = block;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bucket_seconds.is_finite() || self.bucket_seconds <= 0.0 {
            return Err(ConfigError::InvalidBucket(self.bucket_seconds));
        }
        if self.max_width == 0 {
            return Err(ConfigError::Zero { name: "histogram width" });
        }
        if self.max_width > MAX_HISTOGRAM_WIDTH {
            return Err(ConfigError::TooLarge {
                name: "histogram width",
                max: MAX_HISTOGRAM_WIDTH,
            });
        }
        if self.max_height == Some(0) {
            return Err(ConfigError::Zero { name: "histogram height" });
        }
        Ok(())
    }
}

/// Quantize a concurrency series into per-bucket heights
///
/// **Public** - one entry per histogram column
///
/// A bucket holding samples takes their maximum count. An empty bucket
/// carries forward the count of the last sample before it, since
/// concurrency only changes at transitions.
pub fn bucketize(samples: &[ConcurrencySample], config: &HistogramConfig) -> Vec<usize> {
    if samples.is_empty() || config.max_width == 0 {
        return Vec::new();
    }

    let first = samples.iter().map(|s| s.time).fold(f64::INFINITY, f64::min);
    let last = samples.iter().map(|s| s.time).fold(f64::NEG_INFINITY, f64::max);
    let span = last - first;

    let mut width = config.bucket_seconds;
    if config.max_width > 1 {
        width = width.max(span / (config.max_width - 1) as f64);
    }

    let columns = if width > 0.0 {
        ((span / width).floor() as usize + 1).min(config.max_width)
    } else {
        1
    };

    debug!(
        "Histogram: {} samples over {:.3}s into {} buckets of {:.3}s",
        samples.len(),
        span,
        columns,
        width
    );

    let mut peaks: Vec<Option<usize>> = vec![None; columns];
    let mut lasts: Vec<Option<usize>> = vec![None; columns];

    for sample in samples {
        let index = if width > 0.0 {
            (((sample.time - first) / width).floor() as usize).min(columns - 1)
        } else {
            0
        };
        peaks[index] = Some(peaks[index].map_or(sample.active_count, |p| p.max(sample.active_count)));
        lasts[index] = Some(sample.active_count);
    }

    let mut carried = 0;
    peaks
        .into_iter()
        .zip(lasts)
        .map(|(peak, last)| match (peak, last) {
            (Some(peak), Some(last)) => {
                carried = last;
                peak
            }
            _ => carried,
        })
        .collect()
}

/// Scale heights down so the tallest column fits `max_height` rows
///
/// **Public** - no-op when unset or already within bounds
pub fn scale_heights(heights: &[usize], max_height: Option<usize>) -> Vec<usize> {
    let peak = heights.iter().copied().max().unwrap_or(0);

    match max_height {
        Some(limit) if peak > limit => heights.iter().map(|h| h * limit / peak).collect(),
        _ => heights.to_vec(),
    }
}

/// Render the concurrency histogram
///
/// **Public** - main entry point for histogram rendering
///
/// # Returns
/// One line per level, tallest first, each ending in a newline.
/// Empty when there are no samples.
pub fn render_histogram(samples: &[ConcurrencySample], config: &HistogramConfig) -> String {
    let heights = scale_heights(&bucketize(samples, config), config.max_height);
    render_columns(&heights, config.block)
}

/// Draw precomputed column heights as a skyline
///
/// **Public** - lower-level entry point for callers with their own series
pub fn render_columns(heights: &[usize], block: char) -> String {
    let peak = heights.iter().copied().max().unwrap_or(0);
    let mut chart = String::new();

    for level in (1..=peak).rev() {
        let row: String = heights
            .iter()
            .map(|&h| if h >= level { block } else { ' ' })
            .collect();
        chart.push_str(row.trim_end());
        chart.push('\n');
    }

    chart
}
