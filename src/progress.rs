//! Progress display for version checks
//!
//! Provides visual feedback during a check run using indicatif.

use crate::domain::DependencyCoordinate;
use crate::orchestrator::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Resolution of the bar; fractions are scaled onto this length
const BAR_LENGTH: u64 = 1000;

/// Progress reporter for a check run
pub struct Progress {
    /// Current progress bar, absent when display is disabled
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {percent}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");

        let bar = ProgressBar::new(BAR_LENGTH);
        bar.set_style(style);
        bar.set_message("Checking libraries");
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Returns true if the bar is drawn
    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    fn set_fraction(&self, fraction: f64) {
        if let Some(ref bar) = self.bar {
            let position = (fraction.clamp(0.0, 1.0) * BAR_LENGTH as f64).round() as u64;
            bar.set_position(position);
        }
    }
}

impl ProgressSink for Progress {
    fn on_dependency(&self, coordinate: &DependencyCoordinate, fraction: f64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("Checking {}", coordinate.module()));
        }
        self.set_fraction(fraction);
    }

    fn on_advance(&self, fraction: f64) {
        self.set_fraction(fraction);
    }

    fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}
