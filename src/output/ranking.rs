//! Fixed-column table of the longest-running tests.

use crate::timeline::{longest_tests, TestInterval};
use crate::utils::config::{
    DEFAULT_DURATION_WIDTH, DEFAULT_NAME_WIDTH, DEFAULT_RULE_WIDTH, DEFAULT_TOP_N, MAX_TOP_N,
};
use crate::utils::error::ConfigError;

/// Ranking table configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    pub top_n: usize,
    /// Names are padded or truncated to this many characters
    pub name_width: usize,
    pub duration_width: usize,
    /// Length of the dashed separator lines
    pub rule_width: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            name_width: DEFAULT_NAME_WIDTH,
            duration_width: DEFAULT_DURATION_WIDTH,
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }
}

impl RankingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::Zero { name: "top" });
        }
        if self.top_n > MAX_TOP_N {
            return Err(ConfigError::TooLarge {
                name: "top",
                max: MAX_TOP_N,
            });
        }
        if self.name_width == 0 {
            return Err(ConfigError::Zero { name: "name width" });
        }
        Ok(())
    }
}

/// Render the "Top Longest Running Tests" table
///
/// **Public** - main entry point for the duration report
///
/// Header and rules are always printed, even with no completed tests.
pub fn render_ranking_table(intervals: &[TestInterval], config: &RankingConfig) -> String {
    let rule = "-".repeat(config.rule_width);
    let name_width = config.name_width;
    let duration_width = config.duration_width;

    let mut table = String::new();
    table.push_str("Top Longest Running Tests:\n");
    table.push_str(&rule);
    table.push('\n');
    table.push_str(&format!(
        "{:<name_width$} {:>duration_width$}\n",
        "Test Name", "Duration (s)"
    ));
    table.push_str(&rule);
    table.push('\n');

    for interval in longest_tests(intervals, config.top_n) {
        table.push_str(&format!(
            "{:<name_width$} {:>duration_width$.2}\n",
            fit_name(&interval.test_id, name_width),
            interval.duration
        ));
    }

    table.push_str(&rule);
    table.push('\n');
    table
}

/// Truncate a name to at most `width` characters
fn fit_name(name: &str, width: usize) -> &str {
    match name.char_indices().nth(width) {
        Some((cut, _)) => &name[..cut],
        None => name,
    }
}
