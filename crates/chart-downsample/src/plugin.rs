// File: crates/chart-downsample/src/plugin.rs
// Summary: Lifecycle hook trait and the downsample plugin wired to it.

use tracing::{debug, warn};

use crate::config::DownsampleOverrides;
use crate::manager::{ReductionContext, RefreshReport};
use crate::Chart;

/// Hooks a host calls at fixed points of a chart's lifecycle.
pub trait ChartPlugin {
    fn id(&self) -> &'static str;
    /// Called once while the chart is being set up.
    fn before_init(&self, _chart: &mut Chart) {}
    /// Called before every update/redraw.
    fn before_update(&self, _chart: &mut Chart) {}
}

/// Reduces chart datasets on init and on every update, per its options.
#[derive(Clone, Debug, Default)]
pub struct DownsamplePlugin {
    overrides: DownsampleOverrides,
}

impl DownsamplePlugin {
    pub fn new(overrides: DownsampleOverrides) -> Self { Self { overrides } }

    pub fn overrides(&self) -> &DownsampleOverrides { &self.overrides }
}

impl ChartPlugin for DownsamplePlugin {
    fn id(&self) -> &'static str { "downsample" }

    fn before_init(&self, chart: &mut Chart) {
        chart.context = ReductionContext::from_overrides(&self.overrides);
        if chart.config().on_init {
            log_report("init", &chart.refresh());
        }
    }

    fn before_update(&self, chart: &mut Chart) {
        if chart.config().auto {
            log_report("update", &chart.refresh());
        }
    }
}

fn log_report(stage: &str, report: &RefreshReport) {
    debug!(stage, status = ?report.status, reduced = report.reduced(), "downsample pass");
    for (index, err) in report.failures() {
        warn!(stage, index, error = %err, "series left unreduced");
    }
}
