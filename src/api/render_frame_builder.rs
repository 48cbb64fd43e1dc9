use crate::core::{Axis, AxisId, Edge, PixelRect, Viewport};
use crate::error::PlotResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer};

use super::{Plot, PlotRenderContext};

/// Pixel layout of one pass: the figure, the data area and each axis panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub figure_rect: PixelRect,
    pub data_rect: PixelRect,
    pub axis_panels: Vec<(AxisId, PixelRect)>,
}

impl PlotLayout {
    /// Reserves each visible axis's panel on its edge, stacking panels on
    /// the same edge outward in axis order, and gives the rest to data.
    #[must_use]
    pub fn compute(axes: &[Axis], viewport: Viewport) -> Self {
        let figure_rect = viewport.rect();
        let total = |edge: Edge| -> f32 {
            axes.iter()
                .filter(|axis| axis.edge() == edge)
                .map(Axis::measure)
                .sum()
        };
        let data_rect = figure_rect.inset(
            total(Edge::Left),
            total(Edge::Right),
            total(Edge::Top),
            total(Edge::Bottom),
        );

        let mut offsets = [0.0_f32; 4];
        let axis_panels = axes
            .iter()
            .filter(|axis| axis.is_visible())
            .map(|axis| {
                let slot = match axis.edge() {
                    Edge::Left => 0,
                    Edge::Right => 1,
                    Edge::Bottom => 2,
                    Edge::Top => 3,
                };
                let size = axis.measure();
                let panel = axis.panel_rect(data_rect, size, offsets[slot]);
                offsets[slot] += size;
                (axis.id(), panel)
            })
            .collect();

        Self {
            figure_rect,
            data_rect,
            axis_panels,
        }
    }
}

impl<R: Renderer> Plot<R> {
    /// Builds the frame the next render pass would submit.
    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let layout = PlotLayout::compute(&self.axes, self.config.viewport);
        self.build_render_frame_for(&layout)
    }

    pub(super) fn build_render_frame_for(&self, layout: &PlotLayout) -> PlotResult<RenderFrame> {
        let style = self.style;
        let mut frame = RenderFrame::new(self.config.viewport, layout.data_rect)
            .with_rect(RectPrimitive::filled(
                layout.figure_rect,
                style.figure_background,
            ))
            .with_rect(RectPrimitive::filled(
                layout.data_rect,
                style.data_background,
            ));

        for plottable in self.plottables.iter().filter(|p| p.is_visible()) {
            let pair = self.resolve_axes(plottable.axes())?;
            let context = PlotRenderContext {
                x_axis: self.axis(pair.x)?,
                y_axis: self.axis(pair.y)?,
                data_rect: layout.data_rect,
            };
            plottable.render(&context, &mut frame)?;
        }

        for (id, panel) in &layout.axis_panels {
            let axis = self.axis(*id)?;
            frame.push_line(axis_frame_line(
                axis.edge(),
                *panel,
                style.axis_frame_width,
                style.axis_frame_color,
            ));
        }

        let zoom_rectangle = self.interaction.zoom_rectangle();
        if zoom_rectangle.is_visible() {
            frame.push_overlay(
                RectPrimitive::filled(
                    zoom_rectangle.rect(layout.data_rect),
                    style.zoom_rectangle_fill,
                )
                .with_border(style.zoom_rectangle_border, 1.0),
            );
        }

        Ok(frame)
    }
}

/// Line along the side of an axis panel that touches the data area.
fn axis_frame_line(edge: Edge, panel: PixelRect, width: f64, color: Color) -> LinePrimitive {
    let (left, right) = (f64::from(panel.left), f64::from(panel.right));
    let (top, bottom) = (f64::from(panel.top), f64::from(panel.bottom));
    match edge {
        Edge::Bottom => LinePrimitive::new(left, top, right, top, width, color),
        Edge::Top => LinePrimitive::new(left, bottom, right, bottom, width, color),
        Edge::Left => LinePrimitive::new(right, top, right, bottom, width, color),
        Edge::Right => LinePrimitive::new(left, top, left, bottom, width, color),
    }
}
