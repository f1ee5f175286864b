//! Greyscale pixel grids.
//!
//! `PixelGrid` owns a contiguous row-major `u8` buffer with the origin at the
//! top-left corner, so `index(x, y) = x + y * width`. The buffer length always
//! equals `width * height`; constructors reject anything else. Intermediate
//! real-valued results live in [`RawGrid`] until they are normalized back into
//! a `PixelGrid`.

use crate::util::{FilterError, FilterResult};

pub mod border;
mod raw;

#[cfg(feature = "image-io")]
pub mod io;

pub use raw::RawGrid;

/// Owned greyscale image with validated dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Creates a grid from a row-major buffer.
    ///
    /// Fails with [`FilterError::InvalidDimensions`] when either dimension is
    /// zero or `data.len() != width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> FilterResult<Self> {
        let needed = checked_len(width, height, data.len())?;
        if data.len() != needed {
            return Err(FilterError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a grid where every sample is `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> FilterResult<Self> {
        let len = checked_len(width, height, 0)?;
        Self::new(vec![value; len], width, height)
    }

    /// Creates a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> FilterResult<Self>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let len = checked_len(width, height, 0)?;
        let mut data = vec![0u8; len];
        for (y, row) in data.chunks_exact_mut(width).enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                *out = f(x, y);
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a grid from samples already known to fit `width * height`.
    pub(crate) fn from_parts(data: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of samples (`width * height`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; grids have at least one pixel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the flat row-major samples.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the grid and returns its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Flat index of `(x, y)`; callers must stay within bounds.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.index(x, y)).copied()
    }

    /// Returns row `y` as a slice of length `width`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }
}

/// Validates dimensions and returns `width * height`.
///
/// `len` is only used to report the offending buffer size.
pub(crate) fn checked_len(width: usize, height: usize, len: usize) -> FilterResult<usize> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidDimensions { width, height, len });
    }
    width
        .checked_mul(height)
        .ok_or(FilterError::InvalidDimensions { width, height, len })
}
