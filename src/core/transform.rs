use crate::core::AxisRange;

/// Bidirectional mapping between one axis range and one pixel dimension.
///
/// Non-inverted transforms place `range.min` at `pixel_origin` and grow
/// toward larger pixels (X axes, origin = left edge). Inverted transforms grow
/// toward smaller pixels (Y axes, origin = bottom edge) because pixel Y
/// increases downward while data Y increases upward.
///
/// A zero data span, an unset range, or a zero pixel span is degenerate:
/// every value maps to `pixel_origin` and every pixel maps to the range
/// minimum (`0.0` when the range is unset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    min: f64,
    span: f64,
    pixel_span: f64,
    pixel_origin: f64,
    inverted: bool,
}

impl CoordinateTransform {
    #[must_use]
    pub fn new(range: AxisRange, pixel_span: f64, pixel_origin: f64, inverted: bool) -> Self {
        let min = if range.is_set() { range.min() } else { 0.0 };
        Self {
            min,
            span: range.span(),
            pixel_span,
            pixel_origin,
            inverted,
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.span > 0.0 && self.span.is_finite())
            || !self.pixel_span.is_finite()
            || self.pixel_span == 0.0
    }

    /// Pixels per data unit; `0.0` for degenerate transforms.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.pixel_span / self.span
        }
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.pixel_origin;
        }
        let offset = (value - self.min) * self.pixel_span / self.span;
        if self.inverted {
            self.pixel_origin - offset
        } else {
            self.pixel_origin + offset
        }
    }

    #[must_use]
    pub fn to_coordinate(self, pixel: f64) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        let offset = if self.inverted {
            self.pixel_origin - pixel
        } else {
            pixel - self.pixel_origin
        };
        self.min + offset * self.span / self.pixel_span
    }

    /// Scale-only conversion used for drag deltas.
    #[must_use]
    pub fn coordinate_distance_to_pixel_distance(self, distance: f64) -> f64 {
        distance * self.pixels_per_unit()
    }

    #[must_use]
    pub fn pixel_distance_to_coordinate_distance(self, distance: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        distance * self.span / self.pixel_span
    }
}

#[cfg(test)]
mod tests {
    use super::CoordinateTransform;
    use crate::core::AxisRange;

    #[test]
    fn zero_pixel_span_does_not_divide_by_zero() {
        let transform = CoordinateTransform::new(AxisRange::new(0.0, 10.0), 0.0, 7.0, false);
        assert_eq!(transform.to_pixel(3.0), 7.0);
        assert_eq!(transform.to_coordinate(100.0), 0.0);
        assert_eq!(transform.pixel_distance_to_coordinate_distance(5.0), 0.0);
    }
}
