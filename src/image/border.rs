//! Edge-clamped boundary sampling.
//!
//! Out-of-bounds coordinates resolve to the nearest edge pixel, one axis at a
//! time. There is no zero padding and no wraparound.

use crate::image::PixelGrid;

/// Clamps a signed coordinate into `[0, len)`.
///
/// `len` must be non-zero, which every `PixelGrid` dimension is.
#[inline]
pub fn clamp_coord(c: isize, len: usize) -> usize {
    if c <= 0 {
        0
    } else {
        (c as usize).min(len - 1)
    }
}

/// Returns the sample at `(cx, cy)`, replicating edge pixels outside the grid.
#[inline]
pub fn sample_clamped(grid: &PixelGrid, cx: isize, cy: isize) -> u8 {
    let x = clamp_coord(cx, grid.width());
    let y = clamp_coord(cy, grid.height());
    grid.as_slice()[grid.index(x, y)]
}
