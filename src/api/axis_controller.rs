use crate::core::{Axis, AxisId, AxisLimits, AxisPair, AxisRange, Edge, MultiAxisLimits};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::Plot;

impl<R: Renderer> Plot<R> {
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn x_axes(&self) -> impl Iterator<Item = &Axis> + '_ {
        self.axes.iter().filter(|axis| axis.is_horizontal())
    }

    pub fn y_axes(&self) -> impl Iterator<Item = &Axis> + '_ {
        self.axes.iter().filter(|axis| !axis.is_horizontal())
    }

    pub fn axis(&self, id: AxisId) -> PlotResult<&Axis> {
        self.axes
            .iter()
            .find(|axis| axis.id() == id)
            .ok_or(PlotError::UnknownAxis(id))
    }

    pub fn axis_mut(&mut self, id: AxisId) -> PlotResult<&mut Axis> {
        self.axes
            .iter_mut()
            .find(|axis| axis.id() == id)
            .ok_or(PlotError::UnknownAxis(id))
    }

    /// Removes an axis. Plottables still bound to it fail to render or
    /// autoscale until they are rebound.
    pub fn remove_axis(&mut self, id: AxisId) -> PlotResult<Axis> {
        let index = self
            .axes
            .iter()
            .position(|axis| axis.id() == id)
            .ok_or(PlotError::UnknownAxis(id))?;
        Ok(self.axes.remove(index))
    }

    /// Primary horizontal axis: the first bottom axis.
    pub fn x_axis(&self) -> PlotResult<&Axis> {
        self.first_axis_on(Edge::Bottom)
            .map(|index| &self.axes[index])
    }

    /// Primary vertical axis: the first left axis.
    pub fn y_axis(&self) -> PlotResult<&Axis> {
        self.first_axis_on(Edge::Left).map(|index| &self.axes[index])
    }

    pub fn x_axis_mut(&mut self) -> PlotResult<&mut Axis> {
        let index = self.first_axis_on(Edge::Bottom)?;
        Ok(&mut self.axes[index])
    }

    pub fn y_axis_mut(&mut self) -> PlotResult<&mut Axis> {
        let index = self.first_axis_on(Edge::Left)?;
        Ok(&mut self.axes[index])
    }

    /// Pair used by plottables that were never assigned axes.
    pub fn default_axis_pair(&self) -> PlotResult<AxisPair> {
        Ok(AxisPair::new(self.x_axis()?.id(), self.y_axis()?.id()))
    }

    /// Sets the primary axis pair's limits.
    pub fn set_axis_limits(&mut self, left: f64, right: f64, bottom: f64, top: f64) -> PlotResult<()> {
        self.set_axis_limits_partial(Some(left), Some(right), Some(bottom), Some(top))
    }

    /// Sets any subset of the primary axis pair's limits.
    ///
    /// Nothing changes unless both resulting ranges are valid.
    pub fn set_axis_limits_partial(
        &mut self,
        left: Option<f64>,
        right: Option<f64>,
        bottom: Option<f64>,
        top: Option<f64>,
    ) -> PlotResult<()> {
        for value in [left, right, bottom, top].into_iter().flatten() {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(
                    "axis limits must be finite".to_owned(),
                ));
            }
        }

        let x_index = self.first_axis_on(Edge::Bottom)?;
        let y_index = self.first_axis_on(Edge::Left)?;

        let x = merged_limits("x", self.axes[x_index].range(), left, right)?;
        let y = merged_limits("y", self.axes[y_index].range(), bottom, top)?;

        if let Some((min, max)) = x {
            self.axes[x_index].range_mut().set(min, max);
        }
        if let Some((min, max)) = y {
            self.axes[y_index].range_mut().set(min, max);
        }
        Ok(())
    }

    pub fn set_axis_limits_rect(&mut self, limits: AxisLimits) -> PlotResult<()> {
        self.set_axis_limits(limits.x_min, limits.x_max, limits.y_min, limits.y_max)
    }

    /// Current limits of the primary axis pair.
    pub fn axis_limits(&self) -> PlotResult<AxisLimits> {
        let x_axis = self.x_axis()?;
        let y_axis = self.y_axis()?;
        Ok(AxisLimits::new(
            x_axis.min(),
            x_axis.max(),
            y_axis.min(),
            y_axis.max(),
        ))
    }

    /// Snapshot of every axis, used as a drag baseline.
    #[must_use]
    pub fn multi_axis_limits(&self) -> MultiAxisLimits {
        MultiAxisLimits::record(&self.axes)
    }

    /// Writes recorded limits back onto every axis present in `limits`.
    pub fn restore_axis_limits(&mut self, limits: &MultiAxisLimits) {
        for axis in &mut self.axes {
            limits.restore(axis);
        }
    }

    fn first_axis_on(&self, edge: Edge) -> PlotResult<usize> {
        self.axes
            .iter()
            .position(|axis| axis.edge() == edge)
            .ok_or(PlotError::MissingAxis(edge.name()))
    }
}

/// Merges requested sides into `current`; `None` when neither side is given.
///
/// The merged bounds must be finite with `min <= max`, so setting only one
/// side of an unset axis fails instead of half-setting it.
fn merged_limits(
    axis: &str,
    current: AxisRange,
    min: Option<f64>,
    max: Option<f64>,
) -> PlotResult<Option<(f64, f64)>> {
    if min.is_none() && max.is_none() {
        return Ok(None);
    }
    let min = min.unwrap_or(current.min());
    let max = max.unwrap_or(current.max());
    if !min.is_finite() || !max.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "{axis} axis is unset, both of its limits are required"
        )));
    }
    if min > max {
        return Err(PlotError::InvalidData(format!(
            "{axis} axis limits are inverted: min={min} > max={max}"
        )));
    }
    Ok(Some((min, max)))
}
