//! Rayon row-parallel backend (feature-gated).
//!
//! Output rows are disjoint chunks of one preallocated buffer, so each row is
//! written by exactly one worker and no synchronization is needed.

use super::scalar::correlate_row;
use super::CorrelationBackend;
use crate::image::{PixelGrid, RawGrid};
use crate::kernel::Kernel;
use rayon::prelude::*;

/// Backend that distributes output rows across the rayon thread pool.
pub struct RowParallel;

impl CorrelationBackend for RowParallel {
    fn correlate_raw(grid: &PixelGrid, kernel: &Kernel) -> RawGrid {
        let width = grid.width();
        let height = grid.height();
        let mut data = vec![0.0f64; grid.len()];
        data.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| correlate_row(grid, kernel, y, row));
        RawGrid::from_parts(data, width, height)
    }
}
