// File: crates/chart-downsample/src/config.rs
// Summary: Downsample options with documented defaults and caller-override merging.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{DEFAULT_FULL_RANGE_SPAN_MS, DEFAULT_THRESHOLD};

/// Options controlling when and how far datasets are reduced.
///
/// Deserializing a partial options object fills missing fields from
/// `Default`, so `{"enabled": true}` is a complete configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReductionConfig {
    /// Master switch; nothing is reduced while false.
    pub enabled: bool,
    /// Maximum number of points displayed per dataset.
    pub threshold: usize,
    /// Reduce on every update.
    pub auto: bool,
    /// Reduce once when the chart is initialized.
    pub on_init: bool,
    /// Put the original data back on display when reduction is switched off.
    pub restore_original_data: bool,
    /// Accepted for compatibility with existing option objects. Reductions
    /// always read the cached original once one exists.
    pub prefer_original_data: bool,
    /// Visible span that bypasses windowing and reduces the whole series.
    /// `None` disables the bypass.
    pub full_range_span_ms: Option<i64>,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: DEFAULT_THRESHOLD,
            auto: true,
            on_init: true,
            restore_original_data: true,
            prefer_original_data: false,
            full_range_span_ms: DEFAULT_FULL_RANGE_SPAN_MS,
        }
    }
}

impl ReductionConfig {
    /// Parse a (possibly partial) JSON options object onto the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults with `overrides` applied.
    pub fn merged(overrides: &DownsampleOverrides) -> Self {
        overrides.apply(Self::default())
    }
}

/// Caller-supplied overrides; `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownsampleOverrides {
    pub enabled: Option<bool>,
    pub threshold: Option<usize>,
    pub auto: Option<bool>,
    pub on_init: Option<bool>,
    pub restore_original_data: Option<bool>,
    pub prefer_original_data: Option<bool>,
    pub full_range_span_ms: Option<Option<i64>>,
}

impl DownsampleOverrides {
    pub fn enabled(mut self, v: bool) -> Self { self.enabled = Some(v); self }
    pub fn threshold(mut self, v: usize) -> Self { self.threshold = Some(v); self }
    pub fn auto(mut self, v: bool) -> Self { self.auto = Some(v); self }
    pub fn on_init(mut self, v: bool) -> Self { self.on_init = Some(v); self }
    pub fn restore_original_data(mut self, v: bool) -> Self { self.restore_original_data = Some(v); self }
    pub fn prefer_original_data(mut self, v: bool) -> Self { self.prefer_original_data = Some(v); self }
    pub fn full_range_span_ms(mut self, v: Option<i64>) -> Self { self.full_range_span_ms = Some(v); self }

    /// Apply onto `base`, overrides taking precedence.
    pub fn apply(&self, base: ReductionConfig) -> ReductionConfig {
        ReductionConfig {
            enabled: self.enabled.unwrap_or(base.enabled),
            threshold: self.threshold.unwrap_or(base.threshold),
            auto: self.auto.unwrap_or(base.auto),
            on_init: self.on_init.unwrap_or(base.on_init),
            restore_original_data: self.restore_original_data.unwrap_or(base.restore_original_data),
            prefer_original_data: self.prefer_original_data.unwrap_or(base.prefer_original_data),
            full_range_span_ms: self.full_range_span_ms.unwrap_or(base.full_range_span_ms),
        }
    }
}
