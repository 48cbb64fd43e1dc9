use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{
    AxisLimits, AxisPair, Grid, HeatmapImage, IntensityRange, Pixel, PixelRect, normalize,
    quantize_grayscale,
};
use crate::error::PlotResult;
use crate::render::{ImagePrimitive, RenderFrame};

use super::{PlotRenderContext, Plottable};

/// Grayscale raster of a numeric grid, one cell per data unit.
///
/// The image buffer is rebuilt on every intensity or normalization change
/// and the previous buffer is dropped at that point. Frames that are still
/// holding the old buffer keep it alive only until they are dropped.
#[derive(Debug, Clone)]
pub struct Heatmap {
    intensities: Grid,
    domain: Option<IntensityRange>,
    range: Option<IntensityRange>,
    image: Option<Arc<HeatmapImage>>,
    axes: Option<AxisPair>,
    visible: bool,
}

impl Heatmap {
    #[must_use]
    pub fn new(intensities: Grid) -> Self {
        let mut heatmap = Self {
            intensities,
            domain: None,
            range: None,
            image: None,
            axes: None,
            visible: true,
        };
        heatmap.update();
        heatmap
    }

    #[must_use]
    pub fn intensities(&self) -> &Grid {
        &self.intensities
    }

    pub fn set_intensities(&mut self, intensities: Grid) {
        self.intensities = intensities;
        self.update();
    }

    /// Overrides the normalization domain and clamp range; `None` restores
    /// the data-derived default.
    pub fn set_normalization(
        &mut self,
        domain: Option<IntensityRange>,
        range: Option<IntensityRange>,
    ) {
        self.domain = domain;
        self.range = range;
        self.update();
    }

    #[must_use]
    pub fn image(&self) -> Option<&HeatmapImage> {
        self.image.as_deref()
    }

    /// Releases the pixel buffer. The next intensity update rebuilds it.
    pub fn release_image(&mut self) {
        self.image = None;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn update(&mut self) {
        let normalized = normalize(&self.intensities, self.domain, self.range);
        let image = quantize_grayscale(&normalized);
        debug!(
            width = image.width(),
            height = image.height(),
            "rebuilt heatmap image"
        );
        self.image = Some(Arc::new(image));
    }
}

impl Plottable for Heatmap {
    fn axis_limits(&self) -> AxisLimits {
        let (width, height) = self
            .image
            .as_ref()
            .map_or((1.0, 1.0), |image| (image.width() as f64, image.height() as f64));
        AxisLimits::new(0.0, width, 0.0, height)
    }

    fn axes(&self) -> Option<AxisPair> {
        self.axes
    }

    fn set_axes(&mut self, axes: Option<AxisPair>) {
        self.axes = axes;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn render(&self, context: &PlotRenderContext<'_>, frame: &mut RenderFrame) -> PlotResult<()> {
        let Some(image) = &self.image else {
            return Ok(());
        };
        let width = image.width() as f64;
        let height = image.height() as f64;
        let dest = PixelRect::from_corners(
            Pixel::new(context.clamped_pixel_x(0.0), context.clamped_pixel_y(height)),
            Pixel::new(context.clamped_pixel_x(width), context.clamped_pixel_y(0.0)),
        );
        if !dest.intersects(context.data_rect) {
            trace!("heatmap outside data area, skipped");
            return Ok(());
        }
        frame.push_image(ImagePrimitive::new(dest, Arc::clone(image)));
        Ok(())
    }
}
