//! corrfilter is a small greyscale linear-filtering library.
//!
//! The core is a correlation engine with edge-clamped boundary sampling and
//! a normalization step that rounds and clamps every result back to `u8`.
//! On top of it sit a few named filters: invert, box blur, unsharp sharpen
//! and Sobel edge detection. Row-parallel correlation is available via the
//! `rayon` feature and image file IO via the `image-io` feature.

pub mod correlate;
pub mod filter;
pub mod image;
pub mod kernel;
pub mod normalize;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use correlate::{correlate, correlate_raw, correlate_with, CorrelationBackend};
pub use filter::{
    apply_per_pixel, blur, blur_with, edges, edges_with, invert, sharpen, sharpen_with, Filter,
    FilterConfig,
};
pub use crate::image::{PixelGrid, RawGrid};
pub use kernel::Kernel;
pub use normalize::normalize;
pub use util::{FilterError, FilterResult};
