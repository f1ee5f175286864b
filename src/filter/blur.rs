//! Box blur and unsharp masking.

use super::FilterConfig;
use crate::correlate::correlate_with;
use crate::image::{PixelGrid, RawGrid};
use crate::kernel::Kernel;
use crate::trace::filter_event;
use crate::util::FilterResult;

/// Box blur with an `n x n` kernel of weight `1 / n^2`.
///
/// `n` must be odd; other sizes fail with `KernelShape`.
pub fn blur(grid: &PixelGrid, n: usize) -> FilterResult<PixelGrid> {
    blur_with(grid, n, &FilterConfig::default())
}

/// [`blur`] with explicit execution options.
pub fn blur_with(grid: &PixelGrid, n: usize, cfg: &FilterConfig) -> FilterResult<PixelGrid> {
    let kernel = Kernel::box_blur(n)?;
    Ok(correlate_with(grid, &kernel, cfg))
}

/// Unsharp mask: `2 * original - blur(original, n)`, normalized.
///
/// The blurred image is normalized before it is subtracted, and the
/// combination is normalized again.
pub fn sharpen(grid: &PixelGrid, n: usize) -> FilterResult<PixelGrid> {
    sharpen_with(grid, n, &FilterConfig::default())
}

/// [`sharpen`] with explicit execution options.
pub fn sharpen_with(grid: &PixelGrid, n: usize, cfg: &FilterConfig) -> FilterResult<PixelGrid> {
    let blurred = blur_with(grid, n, cfg)?;
    let raw = RawGrid::zip_with(grid, &blurred, |orig, blur| {
        2.0 * f64::from(orig) - f64::from(blur)
    });
    filter_event!("sharpen_combined", size = n);
    Ok(raw.normalize())
}

#[cfg(test)]
mod tests {
    use super::{blur, sharpen};
    use crate::image::PixelGrid;
    use crate::util::FilterError;

    #[test]
    fn blur_of_centre_dot() {
        // Every clamped 3x3 window of a 3x3 image contains the centre exactly
        // once, so all outputs are round(255 / 9).
        let grid = PixelGrid::new(vec![0, 0, 0, 0, 255, 0, 0, 0, 0], 3, 3).unwrap();
        let out = blur(&grid, 3).unwrap();
        assert_eq!(out.as_slice(), &[28u8; 9]);
    }

    #[test]
    fn blur_corner_repeats_clamped_edge() {
        // At (0, 0) the window clamps onto column 0 and row 0 twice each, so
        // the corner sample is counted four times.
        let grid = PixelGrid::new(vec![255, 0, 0, 0, 0, 0, 0, 0, 0], 3, 3).unwrap();
        let out = blur(&grid, 3).unwrap();
        assert_eq!(out.get(0, 0), Some(113));
        assert_eq!(out.get(1, 0), Some(57));
        assert_eq!(out.get(1, 1), Some(28));
        assert_eq!(out.get(2, 2), Some(0));
    }

    #[test]
    fn sharpen_rounds_blur_before_combining() {
        // blur(3) of the centre dot is 28 everywhere, so the centre becomes
        // 2 * 255 - 28 (clamped to 255) and the rest 0 - 28 (clamped to 0).
        let grid = PixelGrid::new(vec![0, 0, 0, 0, 255, 0, 0, 0, 0], 3, 3).unwrap();
        let out = sharpen(&grid, 3).unwrap();
        assert_eq!(out.as_slice(), grid.as_slice());
    }

    #[test]
    fn sharpen_uses_normalized_blur() {
        // Row [0, 3]: blur(3) gives 1 and 2 after rounding (1.0 and 2.0 raw).
        // Sharpen: 2*0 - 1 -> 0, 2*3 - 2 -> 4.
        let grid = PixelGrid::new(vec![0, 3], 2, 1).unwrap();
        let blurred = blur(&grid, 3).unwrap();
        assert_eq!(blurred.as_slice(), &[1, 2]);
        assert_eq!(sharpen(&grid, 3).unwrap().as_slice(), &[0, 4]);
    }

    #[test]
    fn oversized_blur_returns_error() {
        let grid = PixelGrid::filled(2, 2, 9).unwrap();
        let n = (1usize << 32) + 1;
        let err = blur(&grid, n).unwrap_err();
        assert_eq!(err, FilterError::KernelShape { rows: n, cols: n });
        assert!(sharpen(&grid, n).is_err());
    }
}
