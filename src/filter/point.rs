//! Per-pixel maps.

use crate::image::PixelGrid;

/// Applies `f` to every sample, producing a new grid.
pub fn apply_per_pixel<F>(grid: &PixelGrid, f: F) -> PixelGrid
where
    F: Fn(u8) -> u8,
{
    let data = grid.as_slice().iter().map(|&p| f(p)).collect();
    PixelGrid::from_parts(data, grid.width(), grid.height())
}

/// Photographic negative: `255 - p`.
pub fn invert(grid: &PixelGrid) -> PixelGrid {
    apply_per_pixel(grid, |p| 255 - p)
}
