//! Skin pass: chroma-direction distance to a reference skin tone.

use super::{clamp_intensity, FeatureGrid};
use crate::buffer::PixelBuffer;
use crate::luminance::normalized_luma;
use crate::settings::CropSettings;

/// Skin likelihood of a pixel: `1 − |rgb/|rgb| − skin_color|`.
///
/// Brightness is factored out by normalizing the pixel to unit length, so only
/// its color direction matters. Black has no direction and scores 0.
pub fn skin_likelihood(rgb: [u8; 3], skin_color: [f64; 3]) -> f64 {
    let (r, g, b) = (rgb[0] as f64, rgb[1] as f64, rgb[2] as f64);
    let mag = (r * r + g * g + b * b).sqrt();
    if mag == 0.0 {
        return 0.0;
    }

    let rd = r / mag - skin_color[0];
    let gd = g / mag - skin_color[1];
    let bd = b / mag - skin_color[2];
    1.0 - (rd * rd + gd * gd + bd * bd).sqrt()
}

/// Fill `out` with skin intensity.
///
/// A pixel counts as skin when its likelihood exceeds `skin_threshold` and its
/// normalized luma lies in `[skin_brightness_min, skin_brightness_max]`. The
/// likelihood above the threshold is then stretched to 0..=255.
pub fn detect_skin(image: &PixelBuffer, settings: &CropSettings, out: &mut FeatureGrid) {
    debug_assert_eq!((out.width, out.height), (image.width, image.height));

    let threshold = settings.skin_threshold;
    let stretch = 255.0 / (1.0 - threshold);

    for (value, chunk) in out.values.iter_mut().zip(image.rgb_chunks()) {
        let rgb = [chunk[0], chunk[1], chunk[2]];
        let lightness = normalized_luma(rgb);
        let skin = skin_likelihood(rgb, settings.skin_color);

        *value = if skin > threshold
            && lightness >= settings.skin_brightness_min
            && lightness <= settings.skin_brightness_max
        {
            clamp_intensity((skin - threshold) * stretch)
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIN: [f64; 3] = [0.78, 0.57, 0.44];

    fn run(image: &PixelBuffer) -> FeatureGrid {
        let mut grid = FeatureGrid::new(image.width, image.height);
        detect_skin(image, &CropSettings::default(), &mut grid);
        grid
    }

    #[test]
    fn test_black_is_not_skin() {
        assert_eq!(skin_likelihood([0, 0, 0], SKIN), 0.0);
        assert_eq!(run(&PixelBuffer::filled(2, 2, [0, 0, 0])).max_value(), 0);
    }

    #[test]
    fn test_likelihood_ignores_brightness() {
        let dim = skin_likelihood([78, 57, 44], SKIN);
        let bright = skin_likelihood([156, 114, 88], SKIN);
        assert!((dim - bright).abs() < 1e-12);
    }

    #[test]
    fn test_skin_tone_is_detected() {
        // Close to the reference direction, normalized luma ~0.69.
        // The reference vector is slightly longer than unit, so likelihood
        // tops out near 0.94 and intensity near 176.
        let grid = run(&PixelBuffer::filled(3, 3, [200, 146, 113]));
        assert!(grid.get(1, 1) > 150, "got {}", grid.get(1, 1));
    }

    #[test]
    fn test_gray_is_not_skin() {
        // Likelihood ~0.755, below the 0.8 threshold
        let likelihood = skin_likelihood([128, 128, 128], SKIN);
        assert!(likelihood < 0.8);
        assert_eq!(run(&PixelBuffer::filled(2, 2, [128, 128, 128])).max_value(), 0);
    }

    #[test]
    fn test_too_dark_skin_tone_is_rejected() {
        // Right direction, but normalized luma ~0.14 < 0.2
        let grid = run(&PixelBuffer::filled(2, 2, [40, 29, 22]));
        assert_eq!(grid.max_value(), 0);
    }

    #[test]
    fn test_saturated_blue_is_not_skin() {
        assert_eq!(run(&PixelBuffer::filled(2, 2, [0, 0, 255])).max_value(), 0);
    }
}
