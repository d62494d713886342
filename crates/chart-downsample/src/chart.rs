// File: crates/chart-downsample/src/chart.rs
// Summary: Chart aggregate owning datasets, the visible window and the reduction context.

use tracing::debug;

use crate::config::ReductionConfig;
use crate::manager::{self, ReductionContext, RefreshReport};
use crate::series::Series;
use crate::timestamp::Timestamp;
use crate::view::Window;

#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub datasets: Vec<Series>,
    pub window: Window,
    pub context: ReductionContext,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReductionConfig) -> Self {
        Self { context: ReductionContext::new(config), ..Self::default() }
    }

    pub fn config(&self) -> &ReductionConfig { &self.context.config }

    pub fn add_series(&mut self, series: Series) {
        self.datasets.push(series);
    }

    /// Record the axis bounds computed by the host's layout pass.
    pub fn set_scale(&mut self, min: i64, max: i64) {
        self.window.set_scale(min, max);
    }

    /// Restrict the visible time range; empty text on both sides resets it.
    pub fn set_time_range(&mut self, min: impl Into<Timestamp>, max: impl Into<Timestamp>) {
        self.window.set_user_range(min, max);
    }

    pub fn reset_time_range(&mut self) {
        self.window.reset_user_range();
    }

    /// Run a refresh cycle with the current configuration.
    pub fn refresh(&mut self) -> RefreshReport {
        manager::refresh(&mut self.datasets, &self.context, &self.window)
    }

    /// Manual trigger; `threshold` replaces the configured value when given.
    pub fn downsample(&mut self, threshold: Option<usize>) -> RefreshReport {
        if let Some(t) = threshold {
            self.context.config.threshold = t;
        }
        self.refresh()
    }

    /// Switch reduction on or off. Turning it off with `restore_original_data`
    /// set puts the cached originals back on display.
    pub fn set_enabled(&mut self, enabled: bool) {
        let was = self.context.config.enabled;
        self.context.config.enabled = enabled;
        if was && !enabled && self.context.config.restore_original_data {
            let restored = manager::restore_original(&mut self.datasets);
            debug!(restored, "restored original data");
        }
    }
}
