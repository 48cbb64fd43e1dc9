use crate::error::{PlotError, PlotResult};

/// Mutable `[min, max]` interval displayed by one axis.
///
/// A range is either *set* (finite, `min <= max`, possibly zero-width) or
/// *unset*. `reset` stores inverted infinities so that the next `expand`
/// establishes true bounds: `+inf` and `-inf` are the identities of `min`
/// and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::unset()
    }
}

impl AxisRange {
    /// Creates a range from raw bounds without validation.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn unset() -> Self {
        Self::new(f64::INFINITY, f64::NEG_INFINITY)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Returns `true` once the range holds real, non-inverted bounds.
    #[must_use]
    pub fn is_set(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Width of the interval; `0.0` for an unset range.
    #[must_use]
    pub fn span(self) -> f64 {
        if self.is_set() {
            self.max - self.min
        } else {
            0.0
        }
    }

    /// Midpoint of the interval; `0.0` for an unset range.
    #[must_use]
    pub fn center(self) -> f64 {
        if self.is_set() {
            (self.min + self.max) / 2.0
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.is_set() && value >= self.min && value <= self.max
    }

    /// Overwrites both bounds. Used for explicit limits and snapshot restore.
    pub fn set(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Marks the range as unset. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::unset();
    }

    /// Grows the range to also cover `other`.
    ///
    /// Unset or non-finite subranges are ignored. A zero-width subrange is a
    /// real single value and pins the range when it was unset.
    pub fn expand(&mut self, other: AxisRange) {
        if !other.is_set() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Zooms around the range center. `fraction > 1` narrows the span.
    pub fn zoom_frac(&mut self, fraction: f64) -> PlotResult<()> {
        self.zoom_frac_at(fraction, self.center())
    }

    /// Zooms so that `pivot` keeps its relative position inside the range.
    ///
    /// The new span is `span / fraction`. Degenerate ranges are left unchanged.
    pub fn zoom_frac_at(&mut self, fraction: f64, pivot: f64) -> PlotResult<()> {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom fraction must be finite and > 0".to_owned(),
            ));
        }
        if !pivot.is_finite() {
            return Err(PlotError::InvalidData(
                "zoom pivot must be finite".to_owned(),
            ));
        }
        self.apply_zoom(fraction, pivot);
        Ok(())
    }

    /// Translates the range by a data-space delta.
    pub fn pan(&mut self, delta: f64) {
        if !self.is_set() || !delta.is_finite() {
            return;
        }
        self.min += delta;
        self.max += delta;
    }

    /// Translates the range by the fraction of `pixel_span` that was dragged.
    pub fn pan_mouse(&mut self, pixel_delta: f64, pixel_span: f64) {
        if !pixel_span.is_finite() || pixel_span <= 0.0 {
            return;
        }
        self.pan(pixel_delta / pixel_span * self.span());
    }

    /// Converts a drag distance into a center-pivoted zoom.
    ///
    /// The mapping `10^(d / (|d| + pixel_span))` is monotonic in `d`,
    /// positive drags zoom in, and a zero drag is the identity.
    pub fn zoom_mouse_delta(&mut self, pixel_delta: f64, pixel_span: f64) {
        if !pixel_delta.is_finite() || !pixel_span.is_finite() || pixel_span <= 0.0 {
            return;
        }
        let exponent = pixel_delta / (pixel_delta.abs() + pixel_span);
        self.apply_zoom(10f64.powf(exponent), self.center());
    }

    fn apply_zoom(&mut self, fraction: f64, pivot: f64) {
        if self.span() == 0.0 {
            return;
        }
        self.min = pivot - (pivot - self.min) / fraction;
        self.max = pivot + (self.max - pivot) / fraction;
    }
}

#[cfg(test)]
mod tests {
    use super::AxisRange;

    #[test]
    fn unset_range_absorbs_first_expand() {
        let mut range = AxisRange::unset();
        range.expand(AxisRange::new(3.0, 4.0));
        assert_eq!(range, AxisRange::new(3.0, 4.0));
    }

    #[test]
    fn zoom_on_zero_width_range_is_noop() {
        let mut range = AxisRange::new(2.0, 2.0);
        range.zoom_frac(4.0).expect("zoom");
        assert_eq!(range, AxisRange::new(2.0, 2.0));
    }
}
