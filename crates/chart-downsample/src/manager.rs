// File: crates/chart-downsample/src/manager.rs
// Summary: Refresh cycle that windows and reduces every series of a chart.

use tracing::{debug, trace, warn};

use crate::config::{DownsampleOverrides, ReductionConfig};
use crate::error::DownsampleError;
use crate::series::{Reduction, Series};
use crate::view::{Selection, Window};

/// Per-chart reduction state handed to the manager by the host.
#[derive(Clone, Debug, Default)]
pub struct ReductionContext {
    pub config: ReductionConfig,
}

impl ReductionContext {
    pub fn new(config: ReductionConfig) -> Self { Self { config } }

    pub fn from_overrides(overrides: &DownsampleOverrides) -> Self {
        Self::new(ReductionConfig::merged(overrides))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshStatus {
    /// Reduction is switched off.
    Disabled,
    /// Scale bounds are not known yet.
    NoScale,
    Ran(Selection),
}

#[derive(Debug)]
pub struct SeriesOutcome {
    pub index: usize,
    pub result: Result<Reduction, DownsampleError>,
}

#[derive(Debug)]
pub struct RefreshReport {
    pub status: RefreshStatus,
    pub outcomes: Vec<SeriesOutcome>,
}

impl RefreshReport {
    fn skipped(status: RefreshStatus) -> Self {
        Self { status, outcomes: Vec::new() }
    }

    pub fn ran(&self) -> bool { matches!(self.status, RefreshStatus::Ran(_)) }

    /// Number of series whose displayed data was replaced.
    pub fn reduced(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &DownsampleError)> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err().map(|e| (o.index, e)))
    }
}

/// Run one refresh cycle over `datasets`.
///
/// Skips entirely when reduction is disabled or the window has no scale bounds.
/// Otherwise each series is reduced independently; a failing series is reported
/// and leaves its displayed data as it was.
pub fn refresh(datasets: &mut [Series], ctx: &ReductionContext, window: &Window) -> RefreshReport {
    let config = &ctx.config;
    if !config.enabled {
        trace!("downsample disabled; skipping refresh");
        return RefreshReport::skipped(RefreshStatus::Disabled);
    }
    let Some(selection) = window.resolve(config.full_range_span_ms) else {
        trace!("scales not established; skipping refresh");
        return RefreshReport::skipped(RefreshStatus::NoScale);
    };

    let outcomes = datasets
        .iter_mut()
        .enumerate()
        .map(|(index, series)| {
            let result = series.reduce(&selection, config.threshold);
            match &result {
                Ok(r) => debug!(
                    series = %series.label,
                    candidates = r.candidates,
                    kept = r.kept,
                    "reduced series"
                ),
                Err(e) => warn!(series = %series.label, error = %e, "failed to reduce series"),
            }
            SeriesOutcome { index, result }
        })
        .collect();

    RefreshReport { status: RefreshStatus::Ran(selection), outcomes }
}

/// Put every cached original back on display. Returns how many series were restored.
pub fn restore_original(datasets: &mut [Series]) -> usize {
    datasets.iter_mut().map(Series::restore_original).filter(|&restored| restored).count()
}
