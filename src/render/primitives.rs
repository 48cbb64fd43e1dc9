use std::sync::Arc;

use crate::core::{HeatmapImage, PixelRect};
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(PlotError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled and/or outlined rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: PixelRect,
    pub fill_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(rect: PixelRect, color: Color) -> Self {
        Self {
            rect,
            fill_color: Some(color),
            border_color: None,
            border_width: 0.0,
        }
    }

    #[must_use]
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.rect.is_finite() {
            return Err(PlotError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.rect.width() < 0.0 || self.rect.height() < 0.0 {
            return Err(PlotError::InvalidData(
                "rect must not have negative size".to_owned(),
            ));
        }
        if let Some(color) = self.fill_color {
            color.validate()?;
        }
        if let Some(color) = self.border_color {
            color.validate()?;
            if !self.border_width.is_finite() || self.border_width <= 0.0 {
                return Err(PlotError::InvalidData(
                    "rect border width must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Raster upload: one packed RGBA buffer stretched onto `dest`.
///
/// The buffer is shared with the plottable that produced it; the frame only
/// holds it for the duration of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePrimitive {
    pub dest: PixelRect,
    pub image: Arc<HeatmapImage>,
}

impl ImagePrimitive {
    #[must_use]
    pub fn new(dest: PixelRect, image: Arc<HeatmapImage>) -> Self {
        Self { dest, image }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.dest.is_finite() {
            return Err(PlotError::InvalidData(
                "image destination must be finite".to_owned(),
            ));
        }
        if self.image.pixels().len() != self.image.width() * self.image.height() {
            return Err(PlotError::InvalidData(
                "image buffer does not match its dimensions".to_owned(),
            ));
        }
        Ok(())
    }
}
