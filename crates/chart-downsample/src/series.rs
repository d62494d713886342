// File: crates/chart-downsample/src/series.rs
// Summary: Point/sample model and the per-series original/displayed pair.
// Notes:
// - `original` is captured lazily from `displayed` on the first reduction and is
//   never overwritten while present; reductions always read from it.
// - Fields are private so that invariant cannot be bypassed; hosts replace the
//   displayed data through `set_data` and drop the cache with `reset_original`.

use crate::downsample::lttb_indices;
use crate::error::Result;
use crate::timestamp::Timestamp;
use crate::view::Selection;

/// Normalized point: epoch-ms time and value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub t: i64,
    pub y: f64,
}

impl Point {
    pub const fn new(t: i64, y: f64) -> Self { Self { t, y } }
}

/// A point as the host supplies it; `t` may be a number, date-time or text.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub t: Timestamp,
    pub y: f64,
}

impl Sample {
    pub fn new(t: impl Into<Timestamp>, y: f64) -> Self {
        Self { t: t.into(), y }
    }

    pub fn to_point(&self) -> Result<Point> {
        Ok(Point { t: self.t.to_millis()?, y: self.y })
    }
}

impl From<Point> for Sample {
    fn from(p: Point) -> Self { Self { t: Timestamp::Millis(p.t), y: p.y } }
}

/// Outcome of reducing one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Points that fell inside the selection.
    pub candidates: usize,
    /// Points written to the displayed data.
    pub kept: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub label: String,
    displayed: Vec<Sample>,
    original: Option<Vec<Sample>>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), displayed: Vec::new(), original: None }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<Sample>) -> Self {
        Self { label: label.into(), displayed: data, original: None }
    }

    pub fn from_points(label: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        Self::with_data(label, points.into_iter().map(Sample::from).collect())
    }

    /// Currently displayed data (reduced or full).
    pub fn displayed(&self) -> &[Sample] { &self.displayed }

    /// Cached original data, if a reduction has run.
    pub fn original(&self) -> Option<&[Sample]> { self.original.as_deref() }

    pub fn has_original(&self) -> bool { self.original.is_some() }

    /// Replace the displayed data. A cached original is kept and still wins on
    /// the next reduction; call `reset_original` to reduce the new data instead.
    pub fn set_data(&mut self, data: Vec<Sample>) {
        self.displayed = data;
    }

    /// Drop the cached original so the next reduction captures the displayed data again.
    pub fn reset_original(&mut self) {
        self.original = None;
    }

    /// Write the cached original back into the displayed data. Returns false when
    /// nothing was cached.
    pub fn restore_original(&mut self) -> bool {
        match &self.original {
            Some(orig) => {
                self.displayed = orig.clone();
                true
            }
            None => false,
        }
    }

    /// Displayed data normalized to epoch-ms points.
    pub fn displayed_points(&self) -> Result<Vec<Point>> {
        self.displayed.iter().map(Sample::to_point).collect()
    }

    /// Reduce the cached original (capturing it first if needed) to at most
    /// `threshold` points within `selection`, replacing the displayed data.
    ///
    /// A sample whose timestamp cannot be normalized fails the whole call and
    /// leaves the displayed data untouched.
    pub fn reduce(&mut self, selection: &Selection, threshold: usize) -> Result<Reduction> {
        let original = self.original.get_or_insert_with(|| self.displayed.clone());

        let mut points = Vec::with_capacity(original.len());
        let mut source = Vec::with_capacity(original.len());
        for (i, sample) in original.iter().enumerate() {
            let p = sample.to_point()?;
            if selection.includes(p.t) {
                points.push(p);
                source.push(i);
            }
        }

        let keep = lttb_indices(&points, threshold);
        let displayed: Vec<Sample> = keep.iter().map(|&k| original[source[k]].clone()).collect();
        let stats = Reduction { candidates: points.len(), kept: displayed.len() };
        self.displayed = displayed;
        Ok(stats)
    }
}
