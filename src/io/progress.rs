//! Spinner feedback while the solver enumerates tilings

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg} {pos} tilings")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Counts enumerated tilings on a spinner, or silently in quiet mode
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Visible spinner labelled with the run description
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { bar }
    }

    /// Progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one more tiling
    pub fn record_solution(&self) {
        self.bar.inc(1);
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
