//! Saturation pass: HSL saturation within a mid-luma band.

use super::{clamp_intensity, FeatureGrid};
use crate::buffer::PixelBuffer;
use crate::luminance::normalized_luma;
use crate::settings::CropSettings;

/// HSL saturation of an 8-bit RGB pixel, 0.0 to 1.0.
pub fn hsl_saturation(rgb: [u8; 3]) -> f64 {
    let c_max = rgb[0].max(rgb[1]).max(rgb[2]);
    let c_min = rgb[0].min(rgb[1]).min(rgb[2]);
    if c_max == c_min {
        return 0.0;
    }

    let maximum = c_max as f64 / 255.0;
    let minimum = c_min as f64 / 255.0;
    let lightness = (maximum + minimum) / 2.0;
    let d = maximum - minimum;

    if lightness > 0.5 {
        d / (2.0 - maximum - minimum)
    } else {
        d / (maximum + minimum)
    }
}

/// Fill `out` with saturation intensity.
///
/// A pixel counts when its saturation exceeds `saturation_threshold` and its
/// normalized luma lies in `[saturation_brightness_min,
/// saturation_brightness_max]`; the excess is stretched to 0..=255.
pub fn detect_saturation(image: &PixelBuffer, settings: &CropSettings, out: &mut FeatureGrid) {
    debug_assert_eq!((out.width, out.height), (image.width, image.height));

    let threshold = settings.saturation_threshold;
    let stretch = 255.0 / (1.0 - threshold);

    for (value, chunk) in out.values.iter_mut().zip(image.rgb_chunks()) {
        let rgb = [chunk[0], chunk[1], chunk[2]];
        let lightness = normalized_luma(rgb);
        let saturation = hsl_saturation(rgb);

        *value = if saturation > threshold
            && lightness >= settings.saturation_brightness_min
            && lightness <= settings.saturation_brightness_max
        {
            clamp_intensity((saturation - threshold) * stretch)
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(image: &PixelBuffer) -> FeatureGrid {
        let mut grid = FeatureGrid::new(image.width, image.height);
        detect_saturation(image, &CropSettings::default(), &mut grid);
        grid
    }

    #[test]
    fn test_gray_has_zero_saturation() {
        assert_eq!(hsl_saturation([0, 0, 0]), 0.0);
        assert_eq!(hsl_saturation([128, 128, 128]), 0.0);
        assert_eq!(hsl_saturation([255, 255, 255]), 0.0);
    }

    #[test]
    fn test_primaries_are_fully_saturated() {
        assert!((hsl_saturation([255, 0, 0]) - 1.0).abs() < 1e-12);
        assert!((hsl_saturation([0, 255, 0]) - 1.0).abs() < 1e-12);
        assert!((hsl_saturation([0, 0, 255]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_light_branch() {
        // max = 1.0, min = 0.6: lightness 0.8, d = 0.4 -> 0.4 / 0.4 = 1.0
        assert!((hsl_saturation([255, 153, 153]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pure_red_is_detected() {
        // Normalized luma of pure red is ~0.072, inside [0.05, 0.9]
        let grid = run(&PixelBuffer::filled(2, 2, [255, 0, 0]));
        assert_eq!(grid.get(0, 0), 255);
    }

    #[test]
    fn test_luma_band_limits_detection() {
        // Normalized luma ~0.715 is fine, pure green qualifies
        assert_eq!(run(&PixelBuffer::filled(1, 1, [0, 255, 0])).get(0, 0), 255);
        // Cyan: luma ~1.23 is above 0.9
        assert_eq!(run(&PixelBuffer::filled(1, 1, [0, 255, 255])).get(0, 0), 0);
    }

    #[test]
    fn test_weak_saturation_is_rejected() {
        // max 0.6, min 0.4 -> lightness 0.5, saturation 0.2 < 0.4
        assert_eq!(run(&PixelBuffer::filled(1, 1, [153, 102, 102])).get(0, 0), 0);
    }
}
