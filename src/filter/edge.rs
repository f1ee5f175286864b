//! Sobel edge detection.

use super::FilterConfig;
use crate::correlate::correlate_with;
use crate::image::{PixelGrid, RawGrid};
use crate::kernel::Kernel;
use crate::normalize::round_half_even;

/// Sobel gradient magnitude.
///
/// Each gradient is correlated and clamped to `[0, 255]` on its own, so
/// negative responses vanish before the magnitude is taken. The magnitude can
/// reach about 360 and is clamped again.
pub fn edges(grid: &PixelGrid) -> PixelGrid {
    edges_with(grid, &FilterConfig::default())
}

/// [`edges`] with explicit execution options.
pub fn edges_with(grid: &PixelGrid, cfg: &FilterConfig) -> PixelGrid {
    let gx = correlate_with(grid, &Kernel::sobel_x(), cfg);
    let gy = correlate_with(grid, &Kernel::sobel_y(), cfg);
    RawGrid::zip_with(&gx, &gy, |a, b| {
        let (a, b) = (f64::from(a), f64::from(b));
        round_half_even((a * a + b * b).sqrt())
    })
    .normalize()
}
