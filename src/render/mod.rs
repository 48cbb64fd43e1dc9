mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, ImagePrimitive, LinePrimitive, RectPrimitive};

use crate::error::PlotResult;

/// Contract implemented by any drawable surface.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from axis state and gesture handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}
