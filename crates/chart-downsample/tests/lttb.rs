// File: crates/chart-downsample/tests/lttb.rs
// Purpose: Reducer contract: passthrough cases, exact output size, anchors, subsequence order.

use chart_downsample::downsample::{lttb, lttb_indices, reduce};
use chart_downsample::Point;

fn sine(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as i64, (i as f64).sin())).collect()
}

#[test]
fn threshold_at_or_above_len_is_passthrough() {
    let data = sine(10);
    assert_eq!(lttb(&data, 10), data);
    assert_eq!(lttb(&data, 50), data);
}

#[test]
fn non_positive_threshold_is_passthrough() {
    let data = sine(25);
    assert_eq!(lttb(&data, 0), data);
    assert_eq!(reduce(&data, 0), data);
    assert_eq!(reduce(&data, -7), data);
}

#[test]
fn empty_input_stays_empty() {
    assert!(lttb(&[], 5).is_empty());
    assert!(lttb_indices(&[], 0).is_empty());
}

#[test]
fn reduces_to_exact_threshold_keeping_anchors() {
    let data = sine(10_000);
    let out = lttb(&data, 100);
    assert_eq!(out.len(), 100);
    assert_eq!(out[0], data[0]);
    assert_eq!(out[99], data[9_999]);
}

#[test]
fn output_is_ordered_subsequence() {
    let data = sine(2_345);
    let idx = lttb_indices(&data, 137);
    assert_eq!(idx.len(), 137);
    assert!(idx.windows(2).all(|w| w[0] < w[1]), "indices must be strictly increasing");
    let out = lttb(&data, 137);
    for (p, &i) in out.iter().zip(&idx) {
        assert_eq!(*p, data[i]);
    }
}

#[test]
fn every_threshold_below_len_yields_exact_count() {
    for n in 3..60usize {
        let data = sine(n);
        for t in 3..n {
            let out = lttb(&data, t);
            assert_eq!(out.len(), t, "n={n} t={t}");
            assert_eq!(out[0], data[0]);
            assert_eq!(out[t - 1], data[n - 1]);
            assert!(out.iter().all(|p| p.y.is_finite()));
        }
    }
}

#[test]
fn second_pass_is_noop() {
    let data = sine(5_000);
    let once = lttb(&data, 300);
    let twice = lttb(&once, 300);
    assert_eq!(once, twice);
}

#[test]
fn picks_largest_triangle() {
    // bucket_size = 3; single bucket [1, 4) against anchor (0,0) and average (4,0).
    let data = vec![
        Point::new(0, 0.0),
        Point::new(1, 5.0),
        Point::new(2, 1.0),
        Point::new(3, 2.0),
        Point::new(4, 0.0),
    ];
    let out = lttb(&data, 3);
    assert_eq!(out, vec![data[0], data[1], data[4]]);
}

#[test]
fn ties_keep_first_candidate() {
    // Flat line: every triangle has zero area, so each bucket keeps its first index.
    let data: Vec<Point> = (0..10).map(|i| Point::new(i, 0.0)).collect();
    assert_eq!(lttb_indices(&data, 4), vec![0, 1, 5, 9]);
}

#[test]
fn spike_survives_reduction() {
    let mut data: Vec<Point> = (0..1_000).map(|i| Point::new(i, 0.0)).collect();
    data[500].y = 100.0;
    let out = lttb(&data, 20);
    assert!(out.iter().any(|p| p.t == 500 && p.y == 100.0));
}

#[test]
fn tiny_thresholds_keep_only_anchors() {
    let data = sine(8);
    assert_eq!(lttb(&data, 2), vec![data[0], data[7]]);
    assert_eq!(lttb(&data, 1), vec![data[0], data[7]]);
}

#[test]
fn epoch_scale_timestamps() {
    let base = 1_704_067_200_000i64;
    let data: Vec<Point> = (0..3_000)
        .map(|i| Point::new(base + i * 60_000, ((i as f64) * 0.05).cos() * 10.0))
        .collect();
    let out = lttb(&data, 250);
    assert_eq!(out.len(), 250);
    assert_eq!(out[0].t, base);
    assert_eq!(out[249].t, base + 2_999 * 60_000);
}
