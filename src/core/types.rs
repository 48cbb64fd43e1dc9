use serde::{Deserialize, Serialize};

use crate::core::AxisRange;

/// Requested output surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Full-surface rectangle anchored at the origin.
    #[must_use]
    pub fn rect(self) -> PixelRect {
        PixelRect::new(0.0, self.width as f32, 0.0, self.height as f32)
    }
}

/// Location in pixel space. X grows rightward, Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub x: f32,
    pub y: f32,
}

impl Pixel {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Location in data space. Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel space.
///
/// `top` is numerically smaller than `bottom` for any well-formed rectangle
/// because pixel Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Unit rectangle used before the first render pass.
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Builds a normalized rectangle spanning two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Pixel, b: Pixel) -> Self {
        Self::new(a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y))
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn horizontal_center(self) -> f32 {
        (self.left + self.right) / 2.0
    }

    #[must_use]
    pub fn vertical_center(self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    #[must_use]
    pub fn contains(self, pixel: Pixel) -> bool {
        pixel.x >= self.left && pixel.x <= self.right && pixel.y >= self.top && pixel.y <= self.bottom
    }

    /// Returns `true` when the rectangles overlap or touch.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite() && self.right.is_finite() && self.top.is_finite() && self.bottom.is_finite()
    }

    /// Shrinks the rectangle inward by independent amounts per side.
    ///
    /// Opposing sides never cross: a rectangle too small for the requested
    /// insets collapses to zero width or height at its center.
    #[must_use]
    pub fn inset(self, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        let (new_left, new_right) = collapse_if_crossed(self.left + left, self.right - right);
        let (new_top, new_bottom) = collapse_if_crossed(self.top + top, self.bottom - bottom);
        Self::new(new_left, new_right, new_top, new_bottom)
    }
}

impl Default for PixelRect {
    fn default() -> Self {
        Self::unit()
    }
}

fn collapse_if_crossed(low: f32, high: f32) -> (f32, f32) {
    if low <= high {
        (low, high)
    } else {
        let mid = (low + high) / 2.0;
        (mid, mid)
    }
}

/// Axis-aligned bounding rectangle in data space.
///
/// `AxisLimits::empty()` is the "no data" value: its bounds are inverted
/// infinities, so expanding a range by it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisLimits {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    #[must_use]
    pub fn x_range(self) -> AxisRange {
        AxisRange::new(self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(self) -> AxisRange {
        AxisRange::new(self.y_min, self.y_max)
    }

    /// Returns `true` when both spans are finite and non-inverted.
    #[must_use]
    pub fn is_real(self) -> bool {
        self.x_range().is_set() && self.y_range().is_set()
    }

    #[must_use]
    pub fn center(self) -> Coordinates {
        Coordinates::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}
