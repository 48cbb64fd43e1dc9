use tracing::debug;

use crate::core::{AutoScaleMargins, Axis, AxisId, Edge, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{InteractionMode, InteractionState};
use crate::render::Renderer;

use super::render_coordinator::RenderCoordinator;
use super::{Plottable, PlotConfig, RenderInfo, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `Plot` owns the axes, the plottables, gesture state and the cached
/// [`RenderInfo`] of the last pass, and forwards finished frames to its
/// renderer. All methods are expected to be called from one control thread.
pub struct Plot<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotConfig,
    pub(super) style: RenderStyle,
    pub(super) axes: Vec<Axis>,
    pub(super) next_axis_id: u32,
    pub(super) plottables: Vec<Box<dyn Plottable>>,
    pub(super) interaction: InteractionState,
    pub(super) render_info: RenderInfo,
}

impl<R: Renderer> Plot<R> {
    /// Creates a plot with a primary bottom/left axis pair and, unless
    /// disabled in `config`, labelless secondary top/right axes.
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        let config = config.validate()?;

        let mut plot = Self {
            renderer,
            config,
            style: RenderStyle::default(),
            axes: Vec::new(),
            next_axis_id: 0,
            plottables: Vec::new(),
            interaction: InteractionState::default(),
            render_info: RenderInfo::default(),
        };

        plot.add_axis(Edge::Bottom);
        plot.add_axis(Edge::Left);
        if config.secondary_axes {
            plot.add_axis(Edge::Top);
            plot.add_axis(Edge::Right);
        }
        debug!(axes = plot.axes.len(), "created plot");
        Ok(plot)
    }

    #[must_use]
    pub fn config(&self) -> PlotConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Changes the output size used by the next render pass.
    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn margins(&self) -> AutoScaleMargins {
        self.config.margins
    }

    pub fn set_margins(&mut self, margins: AutoScaleMargins) -> PlotResult<()> {
        self.config.margins = margins.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> PlotResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    /// Adds an axis on `edge` and returns its id.
    ///
    /// The axis starts unset; its panel size comes from the configured size
    /// for that edge.
    pub fn add_axis(&mut self, edge: Edge) -> AxisId {
        let id = AxisId(self.next_axis_id);
        self.next_axis_id += 1;
        let panels = self.config.axis_panels;
        let size = match edge {
            Edge::Left => panels.left,
            Edge::Right => panels.right,
            Edge::Bottom => panels.bottom,
            Edge::Top => panels.top,
        };
        self.axes.push(Axis::new(id, edge, size));
        id
    }

    /// Adds a plottable and returns its index.
    pub fn add_plottable(&mut self, plottable: Box<dyn Plottable>) -> usize {
        self.plottables.push(plottable);
        self.plottables.len() - 1
    }

    #[must_use]
    pub fn plottables(&self) -> &[Box<dyn Plottable>] {
        &self.plottables
    }

    pub fn plottable_mut(&mut self, index: usize) -> Option<&mut (dyn Plottable + 'static)> {
        self.plottables.get_mut(index).map(|plottable| plottable.as_mut())
    }

    /// Removes every plottable.
    pub fn clear(&mut self) {
        self.plottables.clear();
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Layout of the most recent render pass.
    #[must_use]
    pub fn last_render_info(&self) -> RenderInfo {
        self.render_info
    }

    /// Runs one render pass and caches its layout.
    pub fn render(&mut self) -> PlotResult<RenderInfo> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
