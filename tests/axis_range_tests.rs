use plot_rs::PlotError;
use plot_rs::core::AxisRange;

#[test]
fn reset_is_idempotent() {
    let mut once = AxisRange::new(1.0, 2.0);
    once.reset();
    let mut twice = AxisRange::new(1.0, 2.0);
    twice.reset();
    twice.reset();

    assert_eq!(once, twice);
    assert_eq!(once, AxisRange::unset());
    assert!(!once.is_set());
    assert_eq!(once.span(), 0.0);
}

#[test]
fn expand_is_order_independent() {
    let mut forward = AxisRange::unset();
    forward.expand(AxisRange::new(1.0, 5.0));
    forward.expand(AxisRange::new(3.0, 8.0));

    let mut backward = AxisRange::unset();
    backward.expand(AxisRange::new(3.0, 8.0));
    backward.expand(AxisRange::new(1.0, 5.0));

    assert_eq!(forward, AxisRange::new(1.0, 8.0));
    assert_eq!(forward, backward);
}

#[test]
fn expand_ignores_empty_and_non_finite_subranges() {
    let mut range = AxisRange::new(1.0, 5.0);
    range.expand(AxisRange::unset());
    range.expand(AxisRange::new(f64::NAN, 100.0));
    range.expand(AxisRange::new(9.0, 3.0));
    assert_eq!(range, AxisRange::new(1.0, 5.0));
}

#[test]
fn expand_by_single_value_pins_unset_range() {
    let mut range = AxisRange::unset();
    range.expand(AxisRange::new(4.0, 4.0));
    assert!(range.is_set());
    assert_eq!(range.span(), 0.0);
    assert_eq!(range.min(), 4.0);
}

#[test]
fn zoom_frac_keeps_pivot_fixed() {
    let mut range = AxisRange::new(0.0, 10.0);
    range.zoom_frac_at(2.0, 5.0).expect("zoom");
    assert_eq!(range, AxisRange::new(2.5, 7.5));
    assert!(range.contains(5.0));

    let mut off_center = AxisRange::new(0.0, 10.0);
    off_center.zoom_frac_at(2.0, 2.0).expect("zoom");
    assert_eq!(off_center, AxisRange::new(1.0, 6.0));
}

#[test]
fn zoom_frac_below_one_zooms_out() {
    let mut range = AxisRange::new(0.0, 10.0);
    range.zoom_frac(0.5).expect("zoom");
    assert_eq!(range, AxisRange::new(-5.0, 15.0));
}

#[test]
fn zoom_frac_rejects_invalid_fraction() {
    let mut range = AxisRange::new(0.0, 10.0);
    for fraction in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = range.zoom_frac(fraction).expect_err("invalid fraction");
        assert!(matches!(err, PlotError::InvalidData(_)));
    }
    assert_eq!(range, AxisRange::new(0.0, 10.0));
}

#[test]
fn zoom_on_unset_range_is_noop() {
    let mut range = AxisRange::unset();
    range.zoom_frac(3.0).expect("zoom");
    assert_eq!(range, AxisRange::unset());
}

#[test]
fn pan_mouse_translates_by_dragged_fraction() {
    let mut range = AxisRange::new(0.0, 10.0);
    range.pan_mouse(0.0, 400.0);
    assert_eq!(range, AxisRange::new(0.0, 10.0));

    range.pan_mouse(400.0, 400.0);
    assert_eq!(range, AxisRange::new(10.0, 20.0));

    range.pan_mouse(-100.0, 400.0);
    assert_eq!(range, AxisRange::new(7.5, 17.5));
}

#[test]
fn pan_mouse_with_zero_pixel_span_is_noop() {
    let mut range = AxisRange::new(0.0, 10.0);
    range.pan_mouse(50.0, 0.0);
    assert_eq!(range, AxisRange::new(0.0, 10.0));
}

#[test]
fn zoom_mouse_delta_is_monotonic_and_signed() {
    let span_after = |delta: f64| {
        let mut range = AxisRange::new(0.0, 10.0);
        range.zoom_mouse_delta(delta, 500.0);
        assert!((range.center() - 5.0).abs() <= 1e-9);
        range.span()
    };

    assert_eq!(span_after(0.0), 10.0);
    assert!(span_after(50.0) < 10.0);
    assert!(span_after(200.0) < span_after(50.0));
    assert!(span_after(-50.0) > 10.0);
    assert!(span_after(-200.0) > span_after(-50.0));
}
