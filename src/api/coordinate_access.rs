use crate::core::{AxisPair, Coordinates, Pixel};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::Plot;

impl<R: Renderer> Plot<R> {
    /// Pixel of `coordinates` on the primary axes, using the last render's
    /// data rectangle (the unit rectangle before the first render).
    pub fn get_pixel(&self, coordinates: Coordinates) -> PlotResult<Pixel> {
        self.get_pixel_on(coordinates, self.default_axis_pair()?)
    }

    /// Coordinates under `pixel` on the primary axes.
    pub fn get_coordinate(&self, pixel: Pixel) -> PlotResult<Coordinates> {
        self.get_coordinate_on(pixel, self.default_axis_pair()?)
    }

    pub fn get_pixel_on(&self, coordinates: Coordinates, pair: AxisPair) -> PlotResult<Pixel> {
        let data_rect = self.render_info.data_rect;
        Ok(Pixel::new(
            self.axis(pair.x)?.get_pixel(coordinates.x, data_rect),
            self.axis(pair.y)?.get_pixel(coordinates.y, data_rect),
        ))
    }

    pub fn get_coordinate_on(&self, pixel: Pixel, pair: AxisPair) -> PlotResult<Coordinates> {
        let data_rect = self.render_info.data_rect;
        Ok(Coordinates::new(
            self.axis(pair.x)?.get_coordinate(pixel.x, data_rect),
            self.axis(pair.y)?.get_coordinate(pixel.y, data_rect),
        ))
    }
}
