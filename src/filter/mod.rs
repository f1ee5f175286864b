//! Named filters built from correlation and per-pixel maps.
//!
//! Every filter borrows its input and returns a freshly allocated grid of the
//! same size. Multi-stage filters normalize each stage before combining, so
//! `sharpen` and `edges` round twice.

mod blur;
mod edge;
mod point;

pub use blur::{blur, blur_with, sharpen, sharpen_with};
pub use edge::{edges, edges_with};
pub use point::{apply_per_pixel, invert};

use crate::correlate::correlate_with;
use crate::image::PixelGrid;
use crate::kernel::Kernel;
use crate::trace::filter_span;
use crate::util::FilterResult;

/// Execution options shared by all filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Correlate rows on the rayon pool (needs the `rayon` feature).
    pub parallel: bool,
}

/// A single filter operation with its parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// `255 - p` for every pixel.
    Invert,
    /// Box blur with an odd `size x size` kernel.
    Blur { size: usize },
    /// Unsharp mask against a `size x size` box blur.
    Sharpen { size: usize },
    /// Sobel gradient magnitude.
    EdgeDetect,
    /// Correlation with a caller-supplied kernel.
    Correlate { kernel: Kernel },
}

impl Filter {
    /// Short lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Invert => "invert",
            Filter::Blur { .. } => "blur",
            Filter::Sharpen { .. } => "sharpen",
            Filter::EdgeDetect => "edges",
            Filter::Correlate { .. } => "correlate",
        }
    }

    /// Runs the filter on `grid`.
    pub fn apply(&self, grid: &PixelGrid, cfg: &FilterConfig) -> FilterResult<PixelGrid> {
        let _span = filter_span!("filter", name = self.name());
        match self {
            Filter::Invert => Ok(invert(grid)),
            Filter::Blur { size } => blur_with(grid, *size, cfg),
            Filter::Sharpen { size } => sharpen_with(grid, *size, cfg),
            Filter::EdgeDetect => Ok(edges_with(grid, cfg)),
            Filter::Correlate { kernel } => Ok(correlate_with(grid, kernel, cfg)),
        }
    }
}
