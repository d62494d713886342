// File: crates/chart-downsample/src/view.rs
// Visible window: scale bounds plus the user time-range override, resolved to a selection.

use tracing::warn;

use crate::series::Point;
use crate::timestamp::Timestamp;
use crate::types::TimeRange;

/// One side of the user-configured time range.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TimeBound {
    /// Not configured.
    #[default]
    Unset,
    /// Explicitly cleared (the host's empty-string sentinel).
    Reset,
    At(Timestamp),
}

impl From<Option<Timestamp>> for TimeBound {
    fn from(v: Option<Timestamp>) -> Self {
        match v {
            None => TimeBound::Unset,
            Some(t) if t.is_empty_text() => TimeBound::Reset,
            Some(t) => TimeBound::At(t),
        }
    }
}

/// Which part of the original series feeds the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Full,
    Range(TimeRange),
}

impl Selection {
    #[inline]
    pub fn includes(&self, t: i64) -> bool {
        match self {
            Selection::Full => true,
            Selection::Range(r) => r.contains(t),
        }
    }

    /// Points inside the selection, order preserved.
    pub fn filter(&self, points: &[Point]) -> Vec<Point> {
        points.iter().copied().filter(|p| self.includes(p.t)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Window {
    /// Axis bounds once the host has laid out its scales.
    pub scale: Option<TimeRange>,
    pub user_min: TimeBound,
    pub user_max: TimeBound,
}

impl Window {
    pub fn from_scale(min: i64, max: i64) -> Self {
        Self { scale: Some(TimeRange::new(min, max)), ..Self::default() }
    }

    pub fn set_scale(&mut self, min: i64, max: i64) {
        self.scale = Some(TimeRange::new(min, max));
    }

    pub fn set_user_range(&mut self, min: impl Into<Timestamp>, max: impl Into<Timestamp>) {
        self.user_min = TimeBound::from(Some(min.into()));
        self.user_max = TimeBound::from(Some(max.into()));
    }

    /// Clear the user range (both bounds become the reset sentinel).
    pub fn reset_user_range(&mut self) {
        self.user_min = TimeBound::Reset;
        self.user_max = TimeBound::Reset;
    }

    /// Decide what to reduce. `None` means the scales are not established yet and
    /// the cycle should be skipped.
    ///
    /// A visible span equal to `full_range_span_ms`, or any unset user bound,
    /// selects the whole series; so does a user range reset on both sides.
    /// Two user values override the scale bounds; otherwise the scale bounds apply.
    pub fn resolve(&self, full_range_span_ms: Option<i64>) -> Option<Selection> {
        let scale = self.scale?;
        if full_range_span_ms == Some(scale.span()) {
            return Some(Selection::Full);
        }
        match (&self.user_min, &self.user_max) {
            (TimeBound::Unset, _) | (_, TimeBound::Unset) => Some(Selection::Full),
            (TimeBound::Reset, TimeBound::Reset) => Some(Selection::Full),
            (TimeBound::At(lo), TimeBound::At(hi)) => match (lo.to_millis(), hi.to_millis()) {
                (Ok(min), Ok(max)) => Some(Selection::Range(TimeRange::new(min, max))),
                (Err(e), _) | (_, Err(e)) => {
                    warn!(error = %e, "ignoring unparseable time range bound; using scale bounds");
                    Some(Selection::Range(scale))
                }
            },
            _ => Some(Selection::Range(scale)),
        }
    }
}
