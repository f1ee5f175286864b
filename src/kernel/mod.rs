//! Square correlation kernels.
//!
//! A kernel of side `k = 2 * mid + 1` stores its weights row-major. The weight
//! at column `i`, row `j` multiplies the input sample offset by
//! `(i - mid, j - mid)` from the output pixel. Kernels are validated on
//! construction: empty, non-square and even-sized inputs are rejected with
//! [`FilterError::KernelShape`], so correlation never sees an off-centre
//! kernel.

use crate::util::{FilterError, FilterResult};

/// Validated odd-sized square weight matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Builds a kernel from nested rows (`rows[j][i]`).
    pub fn new(rows: Vec<Vec<f64>>) -> FilterResult<Self> {
        let size = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != size) {
            return Err(FilterError::KernelShape {
                rows: size,
                cols: bad.len(),
            });
        }
        check_odd_square(size, size)?;
        let weights = rows.into_iter().flatten().collect();
        Ok(Self { size, weights })
    }

    /// Builds a kernel from a flat row-major slice of `size * size` weights.
    pub fn from_slice(size: usize, weights: &[f64]) -> FilterResult<Self> {
        if size.checked_mul(size) != Some(weights.len()) {
            let cols = if size == 0 { 0 } else { weights.len() / size };
            return Err(FilterError::KernelShape { rows: size, cols });
        }
        check_odd_square(size, size)?;
        Ok(Self {
            size,
            weights: weights.to_vec(),
        })
    }

    /// Builds a kernel from a fixed-size array of rows.
    pub fn from_array<const N: usize>(rows: [[f64; N]; N]) -> FilterResult<Self> {
        check_odd_square(N, N)?;
        Ok(Self {
            size: N,
            weights: rows.iter().flatten().copied().collect(),
        })
    }

    /// `n x n` box kernel with every weight equal to `1 / n^2`.
    pub fn box_blur(n: usize) -> FilterResult<Self> {
        check_odd_square(n, n)?;
        let taps = n
            .checked_mul(n)
            .ok_or(FilterError::KernelShape { rows: n, cols: n })?;
        let weight = 1.0 / taps as f64;
        Ok(Self {
            size: n,
            weights: vec![weight; taps],
        })
    }

    /// The 1x1 kernel `[[1]]`.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1.0],
        }
    }

    /// Horizontal Sobel gradient `[[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]`.
    pub fn sobel_x() -> Self {
        Self {
            size: 3,
            weights: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
        }
    }

    /// Vertical Sobel gradient `[[-1, -2, -1], [0, 0, 0], [1, 2, 1]]`.
    pub fn sobel_y() -> Self {
        Self {
            size: 3,
            weights: vec![-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
        }
    }

    /// Side length `k`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the centre tap, `k / 2`.
    pub fn mid(&self) -> usize {
        self.size / 2
    }

    /// Weight at column `i`, row `j`.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i + j * self.size]
    }

    /// Flat row-major weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

fn check_odd_square(rows: usize, cols: usize) -> FilterResult<()> {
    if rows == 0 || rows != cols || rows % 2 == 0 {
        return Err(FilterError::KernelShape { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Kernel;
    use crate::util::FilterError;

    #[test]
    fn new_rejects_non_square_rows() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0], vec![0.0; 3]];
        let err = Kernel::new(rows).unwrap_err();
        assert_eq!(err, FilterError::KernelShape { rows: 3, cols: 2 });
    }

    #[test]
    fn even_and_empty_kernels_are_rejected() {
        assert_eq!(
            Kernel::new(vec![vec![0.25; 2]; 2]).unwrap_err(),
            FilterError::KernelShape { rows: 2, cols: 2 }
        );
        assert_eq!(
            Kernel::new(Vec::new()).unwrap_err(),
            FilterError::KernelShape { rows: 0, cols: 0 }
        );
        assert!(Kernel::box_blur(4).is_err());
        assert!(Kernel::box_blur(0).is_err());
        assert!(Kernel::from_slice(3, &[1.0; 8]).is_err());
        assert!(Kernel::from_array([[1.0; 2]; 2]).is_err());
    }

    #[test]
    fn box_blur_rejects_overflowing_size() {
        let n = (1usize << 32) + 1;
        assert_eq!(
            Kernel::box_blur(n).unwrap_err(),
            FilterError::KernelShape { rows: n, cols: n }
        );
    }

    #[test]
    fn weight_indexes_column_then_row() {
        let kernel = Kernel::new(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.mid(), 1);
        assert_eq!(kernel.weight(2, 0), 3.0);
        assert_eq!(kernel.weight(0, 2), 7.0);
        assert_eq!(kernel.sum(), 45.0);
    }

    #[test]
    fn box_blur_weights_sum_to_one() {
        let kernel = Kernel::box_blur(5).unwrap();
        assert_eq!(kernel.weights().len(), 25);
        assert!(kernel.weights().iter().all(|&w| w == 1.0 / 25.0));
        assert!((kernel.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sobel_kernels_are_transposes() {
        let gx = Kernel::sobel_x();
        let gy = Kernel::sobel_y();
        for j in 0..3 {
            for i in 0..3 {
                assert_eq!(gx.weight(i, j), gy.weight(j, i));
            }
        }
        assert_eq!(gx.sum(), 0.0);
    }
}
