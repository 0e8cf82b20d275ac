//! Luma used by the feature passes.
//!
//! The weights are NOT the BT.709 coefficients: blue is weighted far above
//! its perceptual share and the three weights sum to 1.3. Every threshold in
//! the feature passes assumes exactly these values.

/// Weight of the red channel.
pub const LUMA_R: f64 = 0.0722;

/// Weight of the green channel.
pub const LUMA_G: f64 = 0.7152;

/// Weight of the blue channel.
pub const LUMA_B: f64 = 0.5126;

/// Luma of a pixel from 8-bit channels, in the range 0 to 331.5.
#[inline]
pub fn luma(rgb: [u8; 3]) -> f64 {
    LUMA_R * rgb[0] as f64 + LUMA_G * rgb[1] as f64 + LUMA_B * rgb[2] as f64
}

/// Luma scaled so that 255 maps to 1.0 (may exceed 1.0 for bright blues).
#[inline]
pub fn normalized_luma(rgb: [u8; 3]) -> f64 {
    luma(rgb) / 255.0
}
