use plot_rs::core::{Axis, AxisId, AxisRange, CoordinateTransform, Edge, PixelRect};

#[test]
fn horizontal_transform_grows_rightward_from_origin() {
    let transform = CoordinateTransform::new(AxisRange::new(0.0, 10.0), 100.0, 50.0, false);
    assert_eq!(transform.to_pixel(0.0), 50.0);
    assert_eq!(transform.to_pixel(5.0), 100.0);
    assert_eq!(transform.to_pixel(-5.0), 0.0);
    assert_eq!(transform.to_coordinate(150.0), 10.0);
}

#[test]
fn inverted_transform_grows_upward_from_bottom() {
    let transform = CoordinateTransform::new(AxisRange::new(0.0, 20.0), 200.0, 300.0, true);
    assert_eq!(transform.to_pixel(0.0), 300.0);
    assert_eq!(transform.to_pixel(20.0), 100.0);
    assert_eq!(transform.to_coordinate(200.0), 10.0);
}

#[test]
fn zero_span_range_collapses_to_origin() {
    let transform = CoordinateTransform::new(AxisRange::new(3.0, 3.0), 100.0, 40.0, false);
    assert!(transform.is_degenerate());
    assert_eq!(transform.to_pixel(-1e9), 40.0);
    assert_eq!(transform.to_pixel(3.0), 40.0);
    assert_eq!(transform.to_coordinate(0.0), 3.0);
    assert_eq!(transform.to_coordinate(1e6), 3.0);
}

#[test]
fn unset_range_maps_pixels_to_zero() {
    let transform = CoordinateTransform::new(AxisRange::unset(), 100.0, 40.0, true);
    assert_eq!(transform.to_pixel(12.0), 40.0);
    assert_eq!(transform.to_coordinate(75.0), 0.0);
    assert!(transform.to_coordinate(75.0).is_finite());
}

#[test]
fn distance_conversions_are_scale_only() {
    let transform = CoordinateTransform::new(AxisRange::new(100.0, 110.0), 100.0, 999.0, true);
    assert_eq!(transform.coordinate_distance_to_pixel_distance(2.5), 25.0);
    assert_eq!(transform.pixel_distance_to_coordinate_distance(25.0), 2.5);
    assert_eq!(transform.pixels_per_unit(), 10.0);
}

#[test]
fn axes_pick_orientation_from_edge() {
    let data_rect = PixelRect::new(100.0, 500.0, 50.0, 250.0);

    let mut bottom = Axis::new(AxisId(0), Edge::Bottom, 40.0);
    bottom.range_mut().set(0.0, 4.0);
    assert_eq!(bottom.get_pixel(0.0, data_rect), 100.0);
    assert_eq!(bottom.get_pixel(4.0, data_rect), 500.0);
    assert_eq!(bottom.get_coordinate(300.0, data_rect), 2.0);

    let mut left = Axis::new(AxisId(1), Edge::Left, 60.0);
    left.range_mut().set(0.0, 2.0);
    assert_eq!(left.get_pixel(0.0, data_rect), 250.0);
    assert_eq!(left.get_pixel(2.0, data_rect), 50.0);
    assert_eq!(left.get_coordinate(150.0, data_rect), 1.0);
    assert_eq!(left.get_pixel_distance(1.0, data_rect), 100.0);
    assert_eq!(left.get_coordinate_distance(50.0, data_rect), 0.5);
}

#[test]
fn panel_rects_sit_outside_the_data_area() {
    let data_rect = PixelRect::new(100.0, 500.0, 50.0, 250.0);

    let bottom = Axis::new(AxisId(0), Edge::Bottom, 40.0);
    assert_eq!(
        bottom.panel_rect(data_rect, 40.0, 5.0),
        PixelRect::new(100.0, 500.0, 255.0, 295.0)
    );

    let top = Axis::new(AxisId(1), Edge::Top, 20.0);
    assert_eq!(
        top.panel_rect(data_rect, 20.0, 0.0),
        PixelRect::new(100.0, 500.0, 30.0, 50.0)
    );

    let left = Axis::new(AxisId(2), Edge::Left, 60.0);
    assert_eq!(
        left.panel_rect(data_rect, 60.0, 0.0),
        PixelRect::new(40.0, 100.0, 50.0, 250.0)
    );

    let right = Axis::new(AxisId(3), Edge::Right, 30.0);
    assert_eq!(
        right.panel_rect(data_rect, 30.0, 10.0),
        PixelRect::new(510.0, 540.0, 50.0, 250.0)
    );
}

#[test]
fn hidden_axis_measures_zero() {
    let mut axis = Axis::new(AxisId(0), Edge::Left, 60.0);
    assert_eq!(axis.measure(), 60.0);
    axis.set_visible(false);
    assert_eq!(axis.measure(), 0.0);
}
