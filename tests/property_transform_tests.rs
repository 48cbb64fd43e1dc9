use plot_rs::core::{AxisRange, CoordinateTransform};
use proptest::prelude::*;

proptest! {
    #[test]
    fn to_coordinate_inverts_to_pixel(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in -2.0f64..3.0,
        pixel_span in 1.0f64..4096.0,
        pixel_origin in -500.0f64..2000.0,
        inverted in any::<bool>()
    ) {
        let range = AxisRange::new(min, min + span);
        let value = min + value_factor * span;
        let transform = CoordinateTransform::new(range, pixel_span, pixel_origin, inverted);

        let recovered = transform.to_coordinate(transform.to_pixel(value));
        let tolerance = 1e-9 * (min.abs() + span + value.abs());
        prop_assert!((recovered - value).abs() <= tolerance);
    }

    #[test]
    fn distance_conversions_invert_each_other(
        span in 0.001f64..1_000_000.0,
        pixel_span in 1.0f64..4096.0,
        distance in -1_000_000.0f64..1_000_000.0
    ) {
        let transform = CoordinateTransform::new(AxisRange::new(0.0, span), pixel_span, 0.0, false);
        let pixels = transform.coordinate_distance_to_pixel_distance(distance);
        let recovered = transform.pixel_distance_to_coordinate_distance(pixels);
        prop_assert!((recovered - distance).abs() <= 1e-9 * distance.abs().max(1.0));
    }

    #[test]
    fn expand_matches_min_max_in_any_order(
        a in -1000.0f64..1000.0,
        b in -1000.0f64..1000.0,
        c in -1000.0f64..1000.0,
        d in -1000.0f64..1000.0
    ) {
        let first = AxisRange::new(a.min(b), a.max(b));
        let second = AxisRange::new(c.min(d), c.max(d));

        let mut forward = AxisRange::unset();
        forward.expand(first);
        forward.expand(second);
        let mut backward = AxisRange::unset();
        backward.expand(second);
        backward.expand(first);

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.min(), a.min(b).min(c.min(d)));
        prop_assert_eq!(forward.max(), a.max(b).max(c.max(d)));
    }
}
