// File: crates/chart-downsample/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction over epoch-ms points.

use crate::series::Point;

/// Start index of bucket `k`: `floor(k * bucket_size) + 1`.
#[inline]
fn bucket_bound(k: usize, bucket_size: f64) -> usize {
    (k as f64 * bucket_size).floor() as usize + 1
}

/// LTTB selection returning ascending indices into `data`.
///
/// `threshold == 0` or `threshold >= data.len()` selects every index.
/// Otherwise the first and last indices are always selected and each of the
/// `threshold - 2` interior buckets contributes the point forming the largest
/// triangle with the previous pick and the next bucket's average.
pub fn lttb_indices(data: &[Point], threshold: usize) -> Vec<usize> {
    let n = data.len();
    if threshold == 0 || threshold >= n {
        return (0..n).collect();
    }
    // No interior buckets; only the anchors survive.
    if threshold < 3 {
        return vec![0, n - 1];
    }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(0);

    let mut a = 0usize; // index of the previously selected point
    let mut prev_avg: Option<(f64, f64)> = None;

    for i in 0..(threshold - 2) {
        // Average of the next bucket (the third triangle vertex).
        let avg_start = bucket_bound(i + 1, bucket_size);
        let avg_end = bucket_bound(i + 2, bucket_size).min(n);
        let (avg_x, avg_y) = if avg_start < avg_end {
            let len = (avg_end - avg_start) as f64;
            let (sx, sy) = data[avg_start..avg_end]
                .iter()
                .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.t as f64, sy + p.y));
            (sx / len, sy / len)
        } else {
            // Empty lookahead: carry the previous average forward, or the anchor itself.
            prev_avg.unwrap_or((data[a].t as f64, data[a].y))
        };
        prev_avg = Some((avg_x, avg_y));

        let start = bucket_bound(i, bucket_size);
        let end = bucket_bound(i + 1, bucket_size).min(n - 1).max(start + 1);

        let a_x = data[a].t as f64;
        let a_y = data[a].y;
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for (k, p) in data.iter().enumerate().take(end).skip(start) {
            let area = triangle_area(a_x, a_y, p.t as f64, p.y, avg_x, avg_y);
            // Strict comparison: ties keep the earliest candidate.
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(max_idx);
        a = max_idx;
    }

    sampled.push(n - 1);
    sampled
}

/// Area of the triangle (anchor, candidate, lookahead average).
#[inline]
fn triangle_area(ax: f64, ay: f64, cx: f64, cy: f64, avg_x: f64, avg_y: f64) -> f64 {
    0.5 * ((ax - avg_x) * (cy - ay) - (ax - cx) * (avg_y - ay)).abs()
}

/// Largest-Triangle-Three-Buckets downsampling.
/// Returns `data` unchanged when there is nothing to reduce, else exactly
/// `threshold` points (two when `threshold < 3`).
pub fn lttb(data: &[Point], threshold: usize) -> Vec<Point> {
    if threshold == 0 || threshold >= data.len() {
        return data.to_vec();
    }
    lttb_indices(data, threshold).into_iter().map(|i| data[i]).collect()
}

/// Signed-threshold entry point for hosts that carry counts as plain integers.
/// Non-positive thresholds pass the data through.
pub fn reduce(data: &[Point], threshold: i64) -> Vec<Point> {
    match usize::try_from(threshold) {
        Ok(t) if t > 0 => lttb(data, t),
        _ => data.to_vec(),
    }
}
