//! Real-valued intermediate grids.

use crate::image::PixelGrid;
use crate::normalize::normalize;

/// Un-normalized filter output.
///
/// Samples may be negative, above 255 or fractional. The only way back to a
/// [`PixelGrid`] is [`RawGrid::normalize`].
#[derive(Clone, Debug, PartialEq)]
pub struct RawGrid {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl RawGrid {
    /// Wraps a buffer produced for a grid of the given size.
    pub(crate) fn from_parts(data: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Combines two same-sized pixel grids sample by sample.
    pub(crate) fn zip_with<F>(a: &PixelGrid, b: &PixelGrid, f: F) -> Self
    where
        F: Fn(u8, u8) -> f64,
    {
        debug_assert_eq!((a.width(), a.height()), (b.width(), b.height()));
        let data = a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(&pa, &pb)| f(pa, pb))
            .collect();
        Self::from_parts(data, a.width(), a.height())
    }

    /// Returns the grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the flat row-major samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(x + y * self.width).copied()
    }

    /// Clamps and rounds every sample into a new pixel grid.
    pub fn normalize(&self) -> PixelGrid {
        let data = self.data.iter().map(|&v| normalize(v)).collect();
        PixelGrid::from_parts(data, self.width, self.height)
    }
}
