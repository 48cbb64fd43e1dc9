use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisId, AxisLimits, AxisPair};
use crate::error::{PlotError, PlotResult};

/// Proportional padding applied around tightly fitted data.
///
/// A margin of `0.1` widens a fitted span of 10 units to 11 units, keeping
/// the data centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoScaleMargins {
    pub x: f64,
    pub y: f64,
}

impl Default for AutoScaleMargins {
    fn default() -> Self {
        Self { x: 0.05, y: 0.10 }
    }
}

impl AutoScaleMargins {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn tight() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() || self.x < 0.0 || self.y < 0.0 {
            return Err(PlotError::InvalidData(
                "autoscale margins must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Zoom fraction that widens an X span by the margin.
    #[must_use]
    pub fn zoom_frac_x(self) -> f64 {
        1.0 / (1.0 + self.x)
    }

    #[must_use]
    pub fn zoom_frac_y(self) -> f64 {
        1.0 / (1.0 + self.y)
    }
}

/// Which axes an autoscale pass resets and refits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoscaleScope {
    /// Every axis of the plot.
    All,
    /// Only the two axes of one pair; other axes keep their limits.
    Pair(AxisPair),
}

impl AutoscaleScope {
    fn includes(self, axis: AxisId) -> bool {
        match self {
            Self::All => true,
            Self::Pair(pair) => pair.uses(axis),
        }
    }
}

/// Outcome counters of one autoscale pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoscaleSummary {
    pub axes_fitted: usize,
    pub axes_left_unset: usize,
}

/// Refits axis ranges to the bounds reported by plottables.
///
/// 1. every axis in `scope` is reset;
/// 2. each axis in scope is expanded by the bounds of every plottable bound
///    to it (X bounds for its X axis, Y bounds for its Y axis);
/// 3. unless `tight`, each fitted axis is widened by its margin fraction
///    around its center.
///
/// Axes that no plottable reported real bounds for stay unset.
pub fn autoscale_axes(
    axes: &mut [Axis],
    bounds: &[(AxisPair, AxisLimits)],
    margins: AutoScaleMargins,
    tight: bool,
    scope: AutoscaleScope,
) -> PlotResult<AutoscaleSummary> {
    let margins = margins.validate()?;

    for axis in axes.iter_mut().filter(|axis| scope.includes(axis.id())) {
        axis.range_mut().reset();
    }

    for (pair, limits) in bounds {
        for axis in axes.iter_mut().filter(|axis| scope.includes(axis.id())) {
            if axis.is_horizontal() && axis.id() == pair.x {
                axis.range_mut().expand(limits.x_range());
            } else if !axis.is_horizontal() && axis.id() == pair.y {
                axis.range_mut().expand(limits.y_range());
            }
        }
    }

    let mut summary = AutoscaleSummary::default();
    for axis in axes.iter_mut().filter(|axis| scope.includes(axis.id())) {
        if !axis.range().is_set() {
            summary.axes_left_unset += 1;
            continue;
        }
        summary.axes_fitted += 1;
        if !tight {
            let fraction = if axis.is_horizontal() {
                margins.zoom_frac_x()
            } else {
                margins.zoom_frac_y()
            };
            axis.range_mut().zoom_frac(fraction)?;
        }
    }

    Ok(summary)
}
