use serde::{Deserialize, Serialize};

use crate::core::{AutoScaleMargins, Viewport};
use crate::error::{PlotError, PlotResult};

/// Thickness in pixels reserved outside the data area for axes on each edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPanelSizes {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for AxisPanelSizes {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 15.0,
            bottom: 40.0,
            top: 15.0,
        }
    }
}

impl AxisPanelSizes {
    fn validate(self) -> PlotResult<Self> {
        for (edge, value) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "{edge} axis panel size must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public plot bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: AutoScaleMargins,
    #[serde(default)]
    pub axis_panels: AxisPanelSizes,
    /// Adds labelless top/right axes next to the primary bottom/left pair.
    #[serde(default = "default_secondary_axes")]
    pub secondary_axes: bool,
}

fn default_secondary_axes() -> bool {
    true
}

impl PlotConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: AutoScaleMargins::default(),
            axis_panels: AxisPanelSizes::default(),
            secondary_axes: default_secondary_axes(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: AutoScaleMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_axis_panels(mut self, axis_panels: AxisPanelSizes) -> Self {
        self.axis_panels = axis_panels;
        self
    }

    /// Creates only the primary bottom/left axes.
    #[must_use]
    pub fn without_secondary_axes(mut self) -> Self {
        self.secondary_axes = false;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        self.axis_panels.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse plot config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize plot config: {e}")))
    }
}
