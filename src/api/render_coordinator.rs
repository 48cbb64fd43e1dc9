use tracing::debug;

use crate::error::PlotResult;
use crate::render::Renderer;

use super::render_frame_builder::PlotLayout;
use super::{Plot, RenderInfo};

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// Lays out the figure, submits one frame and, only once the renderer
    /// accepted it, replaces the cached [`RenderInfo`] in a single store.
    pub(super) fn render<R: Renderer>(plot: &mut Plot<R>) -> PlotResult<RenderInfo> {
        let layout = PlotLayout::compute(&plot.axes, plot.config.viewport);
        let frame = plot.build_render_frame_for(&layout)?;
        plot.renderer.render(&frame)?;

        let info = RenderInfo {
            figure_rect: layout.figure_rect,
            data_rect: layout.data_rect,
            rendered: true,
            render_count: plot.render_info.render_count + 1,
        };
        plot.render_info = info;
        debug!(
            data_left = info.data_rect.left,
            data_top = info.data_rect.top,
            data_width = info.data_rect.width(),
            data_height = info.data_rect.height(),
            images = frame.images.len(),
            lines = frame.lines.len(),
            "render pass complete"
        );
        Ok(info)
    }
}
