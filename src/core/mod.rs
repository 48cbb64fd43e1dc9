pub mod autoscale;
pub mod axis;
pub mod axis_range;
pub mod grid;
pub mod multi_axis_limits;
pub mod transform;
pub mod types;

pub use autoscale::{AutoScaleMargins, AutoscaleScope, AutoscaleSummary, autoscale_axes};
pub use axis::{Axis, AxisId, AxisPair, Edge};
pub use axis_range::AxisRange;
pub use grid::{
    Grid, HeatmapImage, IntensityRange, NormalizedGrid, normalize, pack_gray, quantize_grayscale,
};
pub use multi_axis_limits::MultiAxisLimits;
pub use transform::CoordinateTransform;
pub use types::{AxisLimits, Coordinates, Pixel, PixelRect, Viewport};
