// File: crates/chart-downsample/tests/window.rs
// Purpose: Window resolution (scale bounds, user range sentinels, full-span bypass) and filtering.

use chart_downsample::types::{DAY_MS, DEFAULT_FULL_RANGE_SPAN_MS};
use chart_downsample::{Point, Selection, TimeBound, TimeRange, Timestamp, Window};

const SPAN: Option<i64> = DEFAULT_FULL_RANGE_SPAN_MS;

#[test]
fn no_scale_means_skip() {
    let mut w = Window::default();
    w.set_user_range(10i64, 20i64);
    assert_eq!(w.resolve(SPAN), None);
}

#[test]
fn unset_user_range_selects_full_series() {
    let w = Window::from_scale(0, 9_999);
    assert_eq!(w.resolve(SPAN), Some(Selection::Full));

    let mut half = Window::from_scale(0, 9_999);
    half.user_min = TimeBound::At(Timestamp::Millis(5));
    assert_eq!(half.resolve(SPAN), Some(Selection::Full));
}

#[test]
fn full_day_span_bypasses_user_range() {
    let mut w = Window::from_scale(1_000, 1_000 + DAY_MS);
    w.set_user_range(1_500i64, 2_000i64);
    assert_eq!(w.resolve(SPAN), Some(Selection::Full));
}

#[test]
fn disabled_bypass_uses_user_range() {
    let mut w = Window::from_scale(0, DAY_MS);
    w.set_user_range(10i64, 20i64);
    assert_eq!(w.resolve(None), Some(Selection::Range(TimeRange::new(10, 20))));
}

#[test]
fn user_values_override_scale() {
    let mut w = Window::from_scale(0, 9_999);
    w.set_user_range(2_000i64, 2_999i64);
    assert_eq!(w.resolve(SPAN), Some(Selection::Range(TimeRange::new(2_000, 2_999))));
}

#[test]
fn user_text_bounds_are_converted() {
    let mut w = Window::from_scale(0, 10);
    w.set_user_range("2024-01-01T00:00:00Z", "2024-01-02");
    assert_eq!(
        w.resolve(SPAN),
        Some(Selection::Range(TimeRange::new(1_704_067_200_000, 1_704_153_600_000)))
    );
}

#[test]
fn double_reset_selects_full_series() {
    let mut w = Window::from_scale(0, 9_999);
    w.set_user_range("", "");
    assert_eq!(w.user_min, TimeBound::Reset);
    assert_eq!(w.resolve(SPAN), Some(Selection::Full));

    w.set_user_range(1i64, 2i64);
    w.reset_user_range();
    assert_eq!(w.resolve(SPAN), Some(Selection::Full));
}

#[test]
fn half_reset_falls_back_to_scale() {
    let mut w = Window::from_scale(100, 200);
    w.set_user_range("", 150i64);
    assert_eq!(w.resolve(SPAN), Some(Selection::Range(TimeRange::new(100, 200))));
}

#[test]
fn unparseable_user_bound_falls_back_to_scale() {
    let mut w = Window::from_scale(100, 200);
    w.set_user_range("yesterday-ish", 150i64);
    assert_eq!(w.resolve(SPAN), Some(Selection::Range(TimeRange::new(100, 200))));
}

#[test]
fn time_bound_from_option() {
    assert_eq!(TimeBound::from(None), TimeBound::Unset);
    assert_eq!(TimeBound::from(Some(Timestamp::from(""))), TimeBound::Reset);
    assert_eq!(TimeBound::from(Some(Timestamp::Millis(3))), TimeBound::At(Timestamp::Millis(3)));
}

#[test]
fn range_filter_is_inclusive_and_ordered() {
    let pts: Vec<Point> = (0..10).map(|i| Point::new(i, i as f64 * 2.0)).collect();
    let got = Selection::Range(TimeRange::new(3, 6)).filter(&pts);
    assert_eq!(got.iter().map(|p| p.t).collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    assert_eq!(Selection::Full.filter(&pts), pts);
}
