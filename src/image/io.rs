//! Loading and saving greyscale images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Colour images are reduced
//! to luma with `round(0.299 R + 0.587 G + 0.114 B)`; alpha is dropped. Only
//! 8-bit luma, luma+alpha, RGB and RGBA sources are accepted.

use crate::image::PixelGrid;
use crate::normalize::round_half_even;
use crate::util::{FilterError, FilterResult};
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// Luma of an 8-bit RGB triple.
#[inline]
pub fn rgb_to_luma(r: u8, g: u8, b: u8) -> u8 {
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    round_half_even(luma).min(255.0) as u8
}

/// Reduces a decoded image to a single greyscale channel.
pub fn grid_from_dynamic_image(img: &DynamicImage) -> FilterResult<PixelGrid> {
    let (data, width, height) = match img {
        DynamicImage::ImageLuma8(buf) => (buf.as_raw().clone(), buf.width(), buf.height()),
        DynamicImage::ImageLumaA8(buf) => (
            buf.pixels().map(|p| p.0[0]).collect(),
            buf.width(),
            buf.height(),
        ),
        DynamicImage::ImageRgb8(buf) => (
            buf.pixels()
                .map(|p| rgb_to_luma(p.0[0], p.0[1], p.0[2]))
                .collect(),
            buf.width(),
            buf.height(),
        ),
        DynamicImage::ImageRgba8(buf) => (
            buf.pixels()
                .map(|p| rgb_to_luma(p.0[0], p.0[1], p.0[2]))
                .collect(),
            buf.width(),
            buf.height(),
        ),
        other => {
            return Err(FilterError::UnsupportedColorMode {
                mode: format!("{:?}", other.color()),
            })
        }
    };
    PixelGrid::new(data, width as usize, height as usize)
}

/// Copies a grid into an `image` greyscale buffer.
pub fn to_gray_image(grid: &PixelGrid) -> FilterResult<GrayImage> {
    let bad_dims = || FilterError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
        len: grid.len(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| bad_dims())?;
    let height = u32::try_from(grid.height()).map_err(|_| bad_dims())?;
    GrayImage::from_raw(width, height, grid.as_slice().to_vec()).ok_or_else(bad_dims)
}

/// Loads an image from disk and reduces it to greyscale.
pub fn load_grey_image<P: AsRef<Path>>(path: P) -> FilterResult<PixelGrid> {
    let img = image::open(path).map_err(|err| FilterError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_dynamic_image(&img)
}

/// Saves a grid as a single-channel image; the format follows the extension.
pub fn save_grey_image<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> FilterResult<()> {
    to_gray_image(grid)?
        .save(path)
        .map_err(|err| FilterError::ImageIo {
            reason: err.to_string(),
        })
}
