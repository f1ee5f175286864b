//! Scalar reference backend.

use super::CorrelationBackend;
use crate::image::border::sample_clamped;
use crate::image::{PixelGrid, RawGrid};
use crate::kernel::Kernel;

/// Single-threaded raster-order backend.
pub struct Scalar;

impl CorrelationBackend for Scalar {
    fn correlate_raw(grid: &PixelGrid, kernel: &Kernel) -> RawGrid {
        let width = grid.width();
        let height = grid.height();
        let mut data = vec![0.0f64; grid.len()];
        for (y, row) in data.chunks_exact_mut(width).enumerate() {
            correlate_row(grid, kernel, y, row);
        }
        RawGrid::from_parts(data, width, height)
    }
}

/// Fills `out` with the raw sums for output row `y`.
///
/// Taps are accumulated column by column (`i` outer, `j` inner) so the
/// floating-point summation order is fixed for every backend.
pub(crate) fn correlate_row(grid: &PixelGrid, kernel: &Kernel, y: usize, out: &mut [f64]) {
    let size = kernel.size();
    let mid = kernel.mid() as isize;
    let y = y as isize;
    for (x, acc_out) in out.iter_mut().enumerate() {
        let x = x as isize;
        let mut acc = 0.0f64;
        for i in 0..size {
            let cx = x + i as isize - mid;
            for j in 0..size {
                let cy = y + j as isize - mid;
                acc += kernel.weight(i, j) * f64::from(sample_clamped(grid, cx, cy));
            }
        }
        *acc_out = acc;
    }
}
