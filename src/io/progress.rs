//! Progress display for annealing runs, one tick per temperature

use crate::algorithm::annealing::{AnnealStats, TemperatureReport};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks an annealing run across its temperature schedule
pub struct AnnealProgress {
    bar: ProgressBar,
    totals: AnnealStats,
}

impl AnnealProgress {
    /// Progress bar drawn to the terminal
    pub fn new(label: &str, temperatures: usize) -> Self {
        Self::with_bar(label, ProgressBar::new(temperatures as u64))
    }

    /// Progress tracking with nothing drawn
    pub fn hidden(temperatures: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(temperatures as u64);
        Self::with_bar("", bar)
    }

    fn with_bar(label: &str, bar: ProgressBar) -> Self {
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self {
            bar,
            totals: AnnealStats::default(),
        }
    }

    /// Record a finished temperature pass
    pub fn update(&mut self, report: &TemperatureReport) {
        self.totals.merge(report.stats);
        self.bar.set_position(report.index as u64 + 1);
        self.bar.set_message(Self::describe(report));
    }

    /// Outcomes across every pass reported so far
    pub const fn totals(&self) -> AnnealStats {
        self.totals
    }

    /// Number of passes reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Message currently shown beside the bar
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Close the bar, leaving the run-wide tally as its final message
    pub fn finish(&self) {
        self.bar.finish_with_message(Self::summarize(self.totals));
    }

    /// One-line summary of a whole run
    pub fn summarize(totals: AnnealStats) -> String {
        format!(
            "done, {} of {} swaps taken ({} improving, {} by chance)",
            totals.swaps(),
            totals.proposals(),
            totals.improved,
            totals.accepted
        )
    }

    /// One-line summary of a temperature pass
    pub fn describe(report: &TemperatureReport) -> String {
        format!(
            "T={:.2} swaps {}/{} ({} by chance)",
            report.temperature,
            report.stats.swaps(),
            report.stats.proposals(),
            report.stats.accepted
        )
    }
}
