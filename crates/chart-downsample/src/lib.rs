// File: crates/chart-downsample/src/lib.rs
// Summary: Library entry point; LTTB reduction and the per-chart windowing policy around it.

pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod manager;
pub mod plugin;
pub mod series;
pub mod timestamp;
pub mod types;
pub mod view;

pub use chart::Chart;
pub use config::{DownsampleOverrides, ReductionConfig};
pub use downsample::{lttb, lttb_indices, reduce};
pub use error::{DownsampleError, Result};
pub use manager::{refresh, ReductionContext, RefreshReport, RefreshStatus, SeriesOutcome};
pub use plugin::{ChartPlugin, DownsamplePlugin};
pub use series::{Point, Reduction, Series, Sample};
pub use timestamp::Timestamp;
pub use types::TimeRange;
pub use view::{Selection, TimeBound, Window};
