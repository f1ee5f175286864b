//! Correlation of a pixel grid with a square kernel.
//!
//! Every output pixel is the weighted sum of the edge-clamped neighbourhood
//! around it, accumulated in `f64`. [`correlate`] always normalizes the sums
//! back into a [`PixelGrid`]; [`correlate_raw`] stops before normalization.
//! No kernel flipping is applied (this is correlation, not convolution).

use crate::filter::FilterConfig;
use crate::image::{PixelGrid, RawGrid};
use crate::kernel::Kernel;
use crate::trace::{filter_event, filter_span};

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Strategy for evaluating the raw correlation sums.
///
/// Implementations must produce bit-identical output; they only differ in how
/// the rows are scheduled.
pub trait CorrelationBackend {
    /// Computes the un-normalized correlation of `grid` with `kernel`.
    fn correlate_raw(grid: &PixelGrid, kernel: &Kernel) -> RawGrid;
}

/// Correlates and normalizes using the default configuration.
pub fn correlate(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    correlate_with(grid, kernel, &FilterConfig::default())
}

/// Correlates and normalizes, choosing the backend from `cfg`.
pub fn correlate_with(grid: &PixelGrid, kernel: &Kernel, cfg: &FilterConfig) -> PixelGrid {
    let _span = filter_span!(
        "correlate",
        width = grid.width(),
        height = grid.height(),
        ksize = kernel.size()
    );
    let out = correlate_raw_with(grid, kernel, cfg).normalize();
    filter_event!("correlate_done", pixels = out.len(), parallel = cfg.parallel);
    out
}

/// Un-normalized correlation with the scalar backend.
pub fn correlate_raw(grid: &PixelGrid, kernel: &Kernel) -> RawGrid {
    scalar::Scalar::correlate_raw(grid, kernel)
}

/// Un-normalized correlation, choosing the backend from `cfg`.
///
/// `parallel` is ignored when the `rayon` feature is disabled.
pub fn correlate_raw_with(grid: &PixelGrid, kernel: &Kernel, cfg: &FilterConfig) -> RawGrid {
    #[cfg(feature = "rayon")]
    if cfg.parallel {
        return self::rayon::RowParallel::correlate_raw(grid, kernel);
    }
    #[cfg(not(feature = "rayon"))]
    let _ = cfg;
    scalar::Scalar::correlate_raw(grid, kernel)
}
