use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, CoordinateTransform, PixelRect};

/// Stable identity of an axis inside one plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisId(pub u32);

/// Side of the data area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    /// Horizontal edges carry X axes.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Top => "top",
        }
    }
}

/// The X/Y axes a plottable is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisPair {
    pub x: AxisId,
    pub y: AxisId,
}

impl AxisPair {
    #[must_use]
    pub const fn new(x: AxisId, y: AxisId) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn uses(self, axis: AxisId) -> bool {
        self.x == axis || self.y == axis
    }
}

/// One plot axis: an owned [`AxisRange`] plus edge-driven geometry.
///
/// The edge alone decides orientation, so every variant shares one type
/// instead of a per-edge hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    id: AxisId,
    edge: Edge,
    range: AxisRange,
    visible: bool,
    label: String,
    panel_size_px: f32,
}

impl Axis {
    #[must_use]
    pub fn new(id: AxisId, edge: Edge, panel_size_px: f32) -> Self {
        Self {
            id,
            edge,
            range: AxisRange::unset(),
            visible: true,
            label: String::new(),
            panel_size_px,
        }
    }

    #[must_use]
    pub fn id(&self) -> AxisId {
        self.id
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.edge.is_horizontal()
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    pub fn range_mut(&mut self) -> &mut AxisRange {
        &mut self.range
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.range.min()
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.range.max()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[must_use]
    pub fn panel_size_px(&self) -> f32 {
        self.panel_size_px
    }

    pub fn set_panel_size_px(&mut self, size: f32) {
        self.panel_size_px = size.max(0.0);
    }

    /// Thickness reserved for this axis outside the data area.
    #[must_use]
    pub fn measure(&self) -> f32 {
        if self.visible { self.panel_size_px } else { 0.0 }
    }

    /// Transform for this axis against a data rectangle.
    #[must_use]
    pub fn transform(&self, data_rect: PixelRect) -> CoordinateTransform {
        if self.is_horizontal() {
            CoordinateTransform::new(
                self.range,
                f64::from(data_rect.width()),
                f64::from(data_rect.left),
                false,
            )
        } else {
            CoordinateTransform::new(
                self.range,
                f64::from(data_rect.height()),
                f64::from(data_rect.bottom),
                true,
            )
        }
    }

    #[must_use]
    pub fn get_pixel(&self, position: f64, data_rect: PixelRect) -> f32 {
        self.transform(data_rect).to_pixel(position) as f32
    }

    #[must_use]
    pub fn get_coordinate(&self, pixel: f32, data_rect: PixelRect) -> f64 {
        self.transform(data_rect).to_coordinate(f64::from(pixel))
    }

    #[must_use]
    pub fn get_pixel_distance(&self, distance: f64, data_rect: PixelRect) -> f64 {
        self.transform(data_rect)
            .coordinate_distance_to_pixel_distance(distance)
    }

    #[must_use]
    pub fn get_coordinate_distance(&self, distance: f64, data_rect: PixelRect) -> f64 {
        self.transform(data_rect)
            .pixel_distance_to_coordinate_distance(distance)
    }

    /// Panel occupied by this axis, `offset` pixels away from the data area.
    #[must_use]
    pub fn panel_rect(&self, data_rect: PixelRect, size: f32, offset: f32) -> PixelRect {
        match self.edge {
            Edge::Bottom => PixelRect::new(
                data_rect.left,
                data_rect.right,
                data_rect.bottom + offset,
                data_rect.bottom + offset + size,
            ),
            Edge::Top => PixelRect::new(
                data_rect.left,
                data_rect.right,
                data_rect.top - offset - size,
                data_rect.top - offset,
            ),
            Edge::Left => PixelRect::new(
                data_rect.left - offset - size,
                data_rect.left - offset,
                data_rect.top,
                data_rect.bottom,
            ),
            Edge::Right => PixelRect::new(
                data_rect.right + offset,
                data_rect.right + offset + size,
                data_rect.top,
                data_rect.bottom,
            ),
        }
    }
}
