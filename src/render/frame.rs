use crate::core::{PixelRect, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{ImagePrimitive, LinePrimitive, RectPrimitive};

/// Backend-agnostic scene for one plot draw pass.
///
/// Primitives are drawn in field order: rects, images, lines. Within one
/// list, insertion order is draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub data_rect: PixelRect,
    pub rects: Vec<RectPrimitive>,
    pub images: Vec<ImagePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub overlays: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, data_rect: PixelRect) -> Self {
        Self {
            viewport,
            data_rect,
            rects: Vec::new(),
            images: Vec::new(),
            lines: Vec::new(),
            overlays: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    pub fn push_image(&mut self, image: ImagePrimitive) {
        self.images.push(image);
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    /// Overlays are drawn last, above axes.
    pub fn push_overlay(&mut self, rect: RectPrimitive) {
        self.overlays.push(rect);
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in self.rects.iter().chain(&self.overlays) {
            rect.validate()?;
        }
        for image in &self.images {
            image.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.images.is_empty()
            && self.lines.is_empty()
            && self.overlays.is_empty()
    }
}
