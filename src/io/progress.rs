//! Iteration progress display for a single generation run

use crate::io::configuration::PROGRESS_TICK_INTERVAL;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting iterations and tile counts during growth
///
/// Growth has no meaningful completion percentage (the tile count the
/// viewport needs is unknown upfront), so the display is a spinner with a
/// live counter rather than a bar. Updates are throttled to every
/// [`PROGRESS_TICK_INTERVAL`] iterations.
pub struct GenerationProgress {
    bar: Option<ProgressBar>,
}

impl GenerationProgress {
    /// Create a progress display; `quiet` suppresses all output
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Report the current iteration and visible tile count
    pub fn update(&self, iteration: usize, visible_tiles: usize) {
        let Some(ref bar) = self.bar else {
            return;
        };
        if iteration % PROGRESS_TICK_INTERVAL != 0 {
            return;
        }
        bar.set_message(format!(
            "iteration {iteration}, {visible_tiles} tiles in view"
        ));
    }

    /// Clear the display with a final summary line
    pub fn finish(&self, iterations: usize, visible_tiles: usize) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!(
                "done: {visible_tiles} tiles in {iterations} iterations"
            ));
        }
    }
}
