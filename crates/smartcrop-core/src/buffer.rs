//! Source pixel buffers handed to the analyzer.

/// An RGB image in row-major order (3 bytes per pixel).
///
/// This is the only image representation the analysis code reads. Callers
/// decode with whatever library they prefer and convert, or build one
/// directly from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Create a PixelBuffer from any decoded image. Alpha is discarded.
    pub fn from_dynamic_image(img: &image::DynamicImage) -> Self {
        Self::from_rgb_image(img.to_rgb8())
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// RGB sample at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Overwrite the RGB sample at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Iterate over pixels as `[r, g, b]` slices in row-major order.
    pub fn rgb_chunks(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(3)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

impl From<image::RgbImage> for PixelBuffer {
    fn from(img: image::RgbImage) -> Self {
        Self::from_rgb_image(img)
    }
}

impl From<&image::DynamicImage> for PixelBuffer {
    fn from(img: &image::DynamicImage) -> Self {
        Self::from_dynamic_image(img)
    }
}
