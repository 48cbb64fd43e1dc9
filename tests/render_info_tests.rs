use std::cell::Cell;
use std::rc::Rc;

use plot_rs::api::{AxisPanelSizes, RenderInfo};
use plot_rs::core::{Coordinates, Edge, Pixel, PixelRect, Viewport};
use plot_rs::render::{NullRenderer, RenderFrame, Renderer};
use plot_rs::{Plot, PlotConfig, PlotError, PlotResult};

fn config() -> PlotConfig {
    PlotConfig::new(Viewport::new(1100, 700)).with_axis_panels(AxisPanelSizes {
        left: 100.0,
        right: 0.0,
        bottom: 100.0,
        top: 0.0,
    })
}

struct FailingRenderer {
    fail: Rc<Cell<bool>>,
}

impl Renderer for FailingRenderer {
    fn render(&mut self, _: &RenderFrame) -> PlotResult<()> {
        if self.fail.get() {
            return Err(PlotError::InvalidData("backend unavailable".to_owned()));
        }
        Ok(())
    }
}

#[test]
fn queries_use_unit_rect_before_first_render() {
    let mut plot = Plot::new(NullRenderer::default(), config()).expect("plot init");
    plot.set_axis_limits(0.0, 10.0, 0.0, 20.0).expect("limits");

    let info = plot.last_render_info();
    assert_eq!(info, RenderInfo::default());
    assert!(!info.rendered);
    assert_eq!(info.data_rect, PixelRect::unit());

    let pixel = plot.get_pixel(Coordinates::new(5.0, 10.0)).expect("pixel");
    assert_eq!(pixel, Pixel::new(0.5, 0.5));
}

#[test]
fn render_records_data_rect_and_count() {
    let mut plot = Plot::new(NullRenderer::default(), config()).expect("plot init");

    let first = plot.render().expect("render");
    assert!(first.rendered);
    assert_eq!(first.render_count, 1);
    assert_eq!(first.figure_rect, PixelRect::new(0.0, 1100.0, 0.0, 700.0));
    assert_eq!(first.data_rect, PixelRect::new(100.0, 1100.0, 0.0, 600.0));

    let second = plot.render().expect("render");
    assert_eq!(second.render_count, 2);
    assert_eq!(plot.last_render_info(), second);
    assert_eq!(plot.renderer().frames_rendered, 2);
}

#[test]
fn failed_render_keeps_previous_info() {
    let fail = Rc::new(Cell::new(false));
    let renderer = FailingRenderer {
        fail: Rc::clone(&fail),
    };
    let mut plot = Plot::new(renderer, config()).expect("plot init");
    let good = plot.render().expect("render");

    fail.set(true);
    plot.set_viewport(Viewport::new(500, 400)).expect("viewport");
    assert!(plot.render().is_err());
    assert_eq!(plot.last_render_info(), good);
}

#[test]
fn viewport_change_applies_on_next_render() {
    let mut plot = Plot::new(NullRenderer::default(), config()).expect("plot init");
    plot.render().expect("render");

    plot.set_viewport(Viewport::new(600, 400)).expect("viewport");
    assert_eq!(
        plot.last_render_info().data_rect,
        PixelRect::new(100.0, 1100.0, 0.0, 600.0)
    );

    let info = plot.render().expect("render");
    assert_eq!(info.data_rect, PixelRect::new(100.0, 600.0, 0.0, 300.0));
}

#[test]
fn zero_viewport_is_rejected() {
    let mut plot = Plot::new(NullRenderer::default(), config()).expect("plot init");
    let err = plot
        .set_viewport(Viewport::new(0, 300))
        .expect_err("zero width");
    assert!(matches!(err, PlotError::InvalidViewport { width: 0, height: 300 }));
    assert_eq!(plot.viewport(), Viewport::new(1100, 700));

    let result = Plot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(10, 0)));
    assert!(matches!(result, Err(PlotError::InvalidViewport { .. })));
}

#[test]
fn hidden_axis_returns_its_panel_to_data_area() {
    let mut plot = Plot::new(NullRenderer::default(), config()).expect("plot init");
    plot.x_axis_mut().expect("x axis").set_visible(false);

    let info = plot.render().expect("render");
    assert_eq!(info.data_rect, PixelRect::new(100.0, 1100.0, 0.0, 700.0));
}

#[test]
fn axes_on_one_edge_stack_outward() {
    let mut plot = Plot::new(NullRenderer::default(), config()).expect("plot init");
    let extra = plot.add_axis(Edge::Left);

    let info = plot.render().expect("render");
    assert_eq!(info.data_rect, PixelRect::new(200.0, 1100.0, 0.0, 600.0));

    let layout = plot_rs::api::PlotLayout::compute(plot.axes(), plot.viewport());
    let primary = plot.y_axis().expect("y axis").id();
    let panel = |id| {
        layout
            .axis_panels
            .iter()
            .find(|(axis, _)| *axis == id)
            .map(|(_, rect)| *rect)
            .expect("panel")
    };
    assert_eq!(panel(primary), PixelRect::new(100.0, 200.0, 0.0, 600.0));
    assert_eq!(panel(extra), PixelRect::new(0.0, 100.0, 0.0, 600.0));
}

#[test]
fn tiny_viewport_collapses_data_area_without_crossing() {
    let mut plot = Plot::new(
        NullRenderer::default(),
        PlotConfig::new(Viewport::new(50, 30)),
    )
    .expect("plot init");

    let info = plot.render().expect("render");
    assert!(info.data_rect.width() >= 0.0);
    assert!(info.data_rect.height() >= 0.0);
}
