//! Downscaling used by the prescale step.
//!
//! The analyzer only knows the [`Resizer`] capability. [`ImageResizer`] is the
//! default implementation, backed by the `image` crate's resampling filters;
//! any closure `Fn(&PixelBuffer, u32) -> PixelBuffer` works as well.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Capability to produce a smaller copy of a pixel buffer.
pub trait Resizer {
    /// Return a copy of `image` scaled to `target_width`, height following the
    /// aspect ratio.
    ///
    /// Implementations must not fail: return the input unchanged when the
    /// request cannot be honoured.
    fn scale_down(&self, image: &PixelBuffer, target_width: u32) -> PixelBuffer;
}

impl<F> Resizer for F
where
    F: Fn(&PixelBuffer, u32) -> PixelBuffer,
{
    fn scale_down(&self, image: &PixelBuffer, target_width: u32) -> PixelBuffer {
        self(image, target_width)
    }
}

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation.
    #[default]
    Bicubic,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Bicubic => image::imageops::FilterType::CatmullRom,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// [`Resizer`] backed by `image::imageops::resize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageResizer {
    pub filter: FilterType,
}

impl ImageResizer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Resizer for ImageResizer {
    fn scale_down(&self, image: &PixelBuffer, target_width: u32) -> PixelBuffer {
        if image.is_empty() || target_width == 0 || target_width >= image.width {
            return image.clone();
        }

        let target_height = scaled_height(image.width, image.height, target_width);
        let Some(rgb_image) = image.to_rgb_image() else {
            tracing::warn!(
                width = image.width,
                height = image.height,
                len = image.pixels.len(),
                "pixel buffer does not match its dimensions; skipping resize"
            );
            return image.clone();
        };

        let resized = image::imageops::resize(
            &rgb_image,
            target_width,
            target_height,
            self.filter.to_image_filter(),
        );
        PixelBuffer::from_rgb_image(resized)
    }
}

/// Height that keeps the aspect ratio at `target_width`, rounded with a 0.7
/// bias and never below one pixel.
fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = 0.7 + height as f64 * target_width as f64 / width as f64;
    (scaled as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Bicubic.to_image_filter(),
            image::imageops::FilterType::CatmullRom
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_default_filter_is_bicubic() {
        assert_eq!(ImageResizer::default().filter, FilterType::Bicubic);
    }

    #[test]
    fn test_scale_down_preserves_aspect() {
        let img = create_test_image(1000, 600);
        let resized = ImageResizer::default().scale_down(&img, 400);

        assert_eq!(resized.width, 400);
        assert_eq!(resized.height, 240);
        assert_eq!(resized.pixels.len(), 400 * 240 * 3);
    }

    #[test]
    fn test_scaled_height_rounding_bias() {
        // 335 * 100 / 1000 = 33.5 -> 34.2 -> 34
        assert_eq!(scaled_height(1000, 335, 100), 34);
        // 332 * 100 / 1000 = 33.2 -> 33.9 -> 33
        assert_eq!(scaled_height(1000, 332, 100), 33);
        assert_eq!(scaled_height(1000, 1, 10), 1);
    }

    #[test]
    fn test_never_upscales() {
        let img = create_test_image(50, 25);
        let resized = ImageResizer::default().scale_down(&img, 100);
        assert_eq!(resized, img);
    }

    #[test]
    fn test_zero_target_returns_input() {
        let img = create_test_image(50, 25);
        assert_eq!(ImageResizer::default().scale_down(&img, 0), img);
    }

    #[test]
    fn test_mismatched_buffer_returns_input() {
        let img = PixelBuffer {
            width: 10,
            height: 10,
            pixels: vec![0; 12],
        };
        assert_eq!(ImageResizer::default().scale_down(&img, 5), img);
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Bicubic,
            FilterType::Lanczos3,
        ] {
            let resized = ImageResizer::new(filter).scale_down(&img, 50);
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }

    #[test]
    fn test_closure_resizer() {
        let halve = |image: &PixelBuffer, width: u32| {
            PixelBuffer::filled(width, image.height / 2, [1, 2, 3])
        };
        let out = halve.scale_down(&create_test_image(20, 10), 10);
        assert_eq!((out.width, out.height), (10, 5));
    }
}
