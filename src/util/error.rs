//! Error types for corrfilter.

use thiserror::Error;

/// Result alias for corrfilter operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// Errors that can occur when building grids, kernels or running filters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The sample buffer does not match the requested dimensions.
    #[error("invalid dimensions: {width}x{height} does not fit {len} samples")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },
    /// The kernel is empty, not square, or has an even side length.
    #[error("invalid kernel shape: {rows} rows by {cols} columns (expected odd square)")]
    KernelShape { rows: usize, cols: usize },
    /// The source image cannot be reduced to a single greyscale channel.
    #[error("unsupported color mode: {mode}")]
    UnsupportedColorMode { mode: String },
    /// Decoding, encoding or filesystem access failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
