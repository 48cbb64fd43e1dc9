use tracing::{debug, warn};

use crate::core::{AutoscaleScope, AutoscaleSummary, AxisLimits, AxisPair, autoscale_axes};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::Plot;

impl<R: Renderer> Plot<R> {
    /// Fits every axis to the data of the plottables bound to it.
    ///
    /// Margins come from [`Plot::margins`]; `tight` skips them. Axes no
    /// plottable reports real bounds for are left unset (span `0.0`).
    pub fn autoscale(&mut self, tight: bool) -> PlotResult<AutoscaleSummary> {
        self.run_autoscale(tight, AutoscaleScope::All)
    }

    /// Fits only `pair`, considering only plottables bound to those axes.
    pub fn autoscale_pair(&mut self, pair: AxisPair, tight: bool) -> PlotResult<AutoscaleSummary> {
        let pair = self.resolve_axes(Some(pair))?;
        self.run_autoscale(tight, AutoscaleScope::Pair(pair))
    }

    fn run_autoscale(&mut self, tight: bool, scope: AutoscaleScope) -> PlotResult<AutoscaleSummary> {
        let bounds = self.plottable_bounds()?;
        let summary = autoscale_axes(&mut self.axes, &bounds, self.config.margins, tight, scope)?;
        debug!(
            plottables = bounds.len(),
            axes_fitted = summary.axes_fitted,
            tight,
            "autoscaled axes"
        );
        if summary.axes_left_unset > 0 {
            warn!(
                axes_left_unset = summary.axes_left_unset,
                "autoscale found no data for some axes"
            );
        }
        Ok(summary)
    }

    /// Bounds of every plottable paired with its resolved axes.
    fn plottable_bounds(&self) -> PlotResult<Vec<(AxisPair, AxisLimits)>> {
        self.plottables
            .iter()
            .map(|plottable| Ok((self.resolve_axes(plottable.axes())?, plottable.axis_limits())))
            .collect()
    }

    /// Binds unassigned plottables to the default pair and checks that the
    /// pair is one horizontal and one vertical axis owned by this plot.
    pub(super) fn resolve_axes(&self, axes: Option<AxisPair>) -> PlotResult<AxisPair> {
        let pair = match axes {
            Some(pair) => pair,
            None => self.default_axis_pair()?,
        };
        if !self.axis(pair.x)?.is_horizontal() || self.axis(pair.y)?.is_horizontal() {
            return Err(PlotError::InvalidData(
                "axis pair must combine a horizontal X axis and a vertical Y axis".to_owned(),
            ));
        }
        Ok(pair)
    }
}
