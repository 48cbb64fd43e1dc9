use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Colors used by the render coordinator for non-plottable elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub figure_background: Color,
    pub data_background: Color,
    pub axis_frame_color: Color,
    pub axis_frame_width: f64,
    pub zoom_rectangle_fill: Color,
    pub zoom_rectangle_border: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            figure_background: Color::WHITE,
            data_background: Color::WHITE,
            axis_frame_color: Color::BLACK,
            axis_frame_width: 1.0,
            zoom_rectangle_fill: Color::rgba(1.0, 0.0, 0.0, 0.25),
            zoom_rectangle_border: Color::rgb(1.0, 0.0, 0.0),
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> PlotResult<Self> {
        for color in [
            self.figure_background,
            self.data_background,
            self.axis_frame_color,
            self.zoom_rectangle_fill,
            self.zoom_rectangle_border,
        ] {
            color.validate()?;
        }
        if !self.axis_frame_width.is_finite() || self.axis_frame_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "axis frame width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
