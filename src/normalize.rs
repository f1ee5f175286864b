//! Mapping real values back to 8-bit intensities.
//!
//! Values are clamped to `[0, 255]` and rounded to the nearest integer with
//! ties going to the even neighbour (`2.5 -> 2`, `3.5 -> 4`). The same rounding
//! is used wherever the crate turns a real number into a pixel.

/// Clamps `v` to `[0, 255]` and rounds half to even. NaN maps to 0.
#[inline]
pub fn normalize(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    round_half_even(v.clamp(0.0, 255.0)) as u8
}

/// Rounds to the nearest integer, ties to even.
#[inline]
pub(crate) fn round_half_even(v: f64) -> f64 {
    v.round_ties_even()
}
