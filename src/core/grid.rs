#[cfg(feature = "parallel-normalization")]
use rayon::prelude::*;

use crate::error::{PlotError, PlotResult};

/// Dense 2-D grid of finite samples stored row-major.
///
/// `(row, col)` lives at `values[row * width + col]` and maps to output
/// pixel `(x = col, y = row)`; row 0 is the top image row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Grid {
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> PlotResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidData(format!(
                "grid dimensions must be > 0, got {width}x{height}"
            )));
        }
        if width.checked_mul(height) != Some(values.len()) {
            return Err(PlotError::InvalidData(format!(
                "grid of {width}x{height} requires {} values, got {}",
                width.saturating_mul(height),
                values.len()
            )));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(PlotError::InvalidData(
                "grid values must be finite".to_owned(),
            ));
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Builds a grid from equally sized rows, top row first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> PlotResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(PlotError::InvalidData(
                "grid rows must all have the same length".to_owned(),
            ));
        }
        let values = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::new(width, height, values)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.values.get(row * self.width + col).copied()
    }

    /// Smallest and largest sample.
    #[must_use]
    pub fn value_range(&self) -> IntensityRange {
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &value| {
                (min.min(value), max.max(value))
            });
        IntensityRange { min, max }
    }
}

/// Closed interval of intensities used as normalization domain or range.
///
/// Only built through [`IntensityRange::new`], so bounds are always finite
/// with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    min: f64,
    max: f64,
}

impl IntensityRange {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidData(
                "intensity range must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Position of `value` inside this interval, `0.0` when it has no width.
    #[must_use]
    fn fraction_of(self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            0.0
        } else {
            (value - self.min) / span
        }
    }
}

/// Grid of values in `[0, 1]` with the same layout as its source grid.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl NormalizedGrid {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.values.get(row * self.width + col).copied()
    }
}

/// Maps every cell into `[0, 1]`.
///
/// `domain` defaults to the grid's own value range and `range` defaults to
/// `domain`. The domain is widened to cover `range`, each cell is scaled
/// through the domain and then clamped to where `range` lands inside it.
/// A zero-width domain maps every cell to `0.0`.
///
/// Cells are independent; with the `parallel-normalization` feature the pass
/// runs data-parallel while preserving cell order.
pub fn normalize(
    grid: &Grid,
    domain: Option<IntensityRange>,
    range: Option<IntensityRange>,
) -> NormalizedGrid {
    let domain = domain.unwrap_or_else(|| grid.value_range());
    let range = range.unwrap_or(domain);
    let domain = domain.union(range);
    let clamp_min = domain.fraction_of(range.min);
    let clamp_max = domain.fraction_of(range.max);
    let map = |value: f64| domain.fraction_of(value).max(clamp_min).min(clamp_max);

    #[cfg(feature = "parallel-normalization")]
    let values: Vec<f64> = grid.values.par_iter().map(|&value| map(value)).collect();

    #[cfg(not(feature = "parallel-normalization"))]
    let values: Vec<f64> = grid.values.iter().map(|&value| map(value)).collect();

    NormalizedGrid {
        width: grid.width,
        height: grid.height,
        values,
    }
}

/// Owned raster of packed RGBA pixels, row-major, top row first.
///
/// Each `u32` holds red in the lowest byte and alpha in the highest, so
/// `to_le_bytes` yields the channels in R, G, B, A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapImage {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl HeatmapImage {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Flattens the buffer into `width * height * 4` bytes in RGBA order.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| pixel.to_le_bytes())
            .collect()
    }
}

/// Packs one normalized intensity as an opaque gray pixel.
#[must_use]
pub fn pack_gray(intensity: f64) -> u32 {
    let level = (intensity * 255.0) as u8;
    u32::from_le_bytes([level, level, level, 0xff])
}

/// Converts normalized cells into opaque grayscale pixels, one per cell.
#[must_use]
pub fn quantize_grayscale(normalized: &NormalizedGrid) -> HeatmapImage {
    #[cfg(feature = "parallel-normalization")]
    let pixels: Vec<u32> = normalized
        .values
        .par_iter()
        .map(|&value| pack_gray(value))
        .collect();

    #[cfg(not(feature = "parallel-normalization"))]
    let pixels: Vec<u32> = normalized
        .values
        .iter()
        .map(|&value| pack_gray(value))
        .collect();

    HeatmapImage {
        width: normalized.width,
        height: normalized.height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, IntensityRange, normalize, pack_gray};

    #[test]
    fn pack_gray_places_red_in_low_byte() {
        assert_eq!(pack_gray(1.0).to_le_bytes(), [255, 255, 255, 255]);
        assert_eq!(pack_gray(0.0), 0xff00_0000);
    }

    #[test]
    fn grid_value_range_is_a_valid_intensity_range() {
        let grid = Grid::new(3, 1, vec![4.0, -2.0, 9.0]).expect("grid");
        let range = grid.value_range();
        assert_eq!((range.min(), range.max()), (-2.0, 9.0));
    }

    #[test]
    fn non_finite_intensity_bounds_never_reach_normalization() {
        assert!(IntensityRange::new(f64::NAN, 1.0).is_err());
        assert!(IntensityRange::new(0.0, f64::INFINITY).is_err());

        let grid = Grid::new(2, 1, vec![0.0, 1.0]).expect("grid");
        let domain = IntensityRange::new(0.0, 1.0).expect("domain");
        let normalized = normalize(&grid, Some(domain), None);
        assert!(normalized.values().iter().all(|value| value.is_finite()));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(Grid::from_rows(&rows).is_err());
    }
}
