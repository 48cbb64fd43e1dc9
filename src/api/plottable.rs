use crate::core::{Axis, AxisLimits, AxisPair, PixelRect};
use crate::error::PlotResult;
use crate::render::RenderFrame;

/// Anything that can be drawn inside the data area.
///
/// Autoscale only reads `axis_limits`; it never mutates a plottable.
pub trait Plottable {
    /// Data-space bounds, possibly [`AxisLimits::empty`].
    fn axis_limits(&self) -> AxisLimits;

    /// Assigned axes; `None` binds to the plot's default bottom/left pair.
    fn axes(&self) -> Option<AxisPair>;

    fn set_axes(&mut self, axes: Option<AxisPair>);

    fn is_visible(&self) -> bool {
        true
    }

    fn render(&self, context: &PlotRenderContext<'_>, frame: &mut RenderFrame) -> PlotResult<()>;
}

/// Resolved axes and data rectangle handed to a plottable during a pass.
#[derive(Debug, Clone, Copy)]
pub struct PlotRenderContext<'a> {
    pub x_axis: &'a Axis,
    pub y_axis: &'a Axis,
    pub data_rect: PixelRect,
}

/// Largest pixel magnitude handed to a renderer. Deep zooms push data
/// positions far outside the surface; beyond this they would overflow `f32`.
const PIXEL_LIMIT: f64 = (f32::MAX / 2.0) as f64;

impl PlotRenderContext<'_> {
    #[must_use]
    pub fn pixel_x(&self, x: f64) -> f32 {
        self.x_axis.get_pixel(x, self.data_rect)
    }

    #[must_use]
    pub fn pixel_y(&self, y: f64) -> f32 {
        self.y_axis.get_pixel(y, self.data_rect)
    }

    /// Like [`Self::pixel_x`] but finite for any finite `x`, for primitive
    /// geometry.
    #[must_use]
    pub fn clamped_pixel_x(&self, x: f64) -> f32 {
        clamp_pixel(self.x_axis.transform(self.data_rect).to_pixel(x))
    }

    #[must_use]
    pub fn clamped_pixel_y(&self, y: f64) -> f32 {
        clamp_pixel(self.y_axis.transform(self.data_rect).to_pixel(y))
    }
}

fn clamp_pixel(pixel: f64) -> f32 {
    pixel.clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as f32
}
