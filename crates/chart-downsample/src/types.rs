// File: crates/chart-downsample/src/types.rs
// Summary: Shared types and constants (defaults, time spans).

/// Default number of points kept per dataset.
pub const DEFAULT_THRESHOLD: usize = 1000;

/// One calendar day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Default visible span that bypasses windowing (the host's "whole day" view).
pub const DEFAULT_FULL_RANGE_SPAN_MS: Option<i64> = Some(DAY_MS);

/// Inclusive time range in epoch milliseconds.
/// Contract: `min <= max` is expected but not enforced; an inverted range selects nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub min: i64,
    pub max: i64,
}

impl TimeRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
    /// Width of the range (`max - min`).
    pub const fn span(&self) -> i64 { self.max.saturating_sub(self.min) }
    #[inline]
    pub const fn contains(&self, t: i64) -> bool { t >= self.min && t <= self.max }
}
