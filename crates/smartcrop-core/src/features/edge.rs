//! Detail pass: a 4-neighbour Laplacian over luma.

use super::{clamp_intensity, FeatureGrid};
use crate::buffer::PixelBuffer;
use crate::luminance::luma;

/// Fill `out` with edge/detail intensity.
///
/// Interior pixels get `4·c − up − left − right − down` on luma, clamped to
/// 0..=255. The one-pixel border is always 0; nothing wraps or mirrors.
pub fn detect_edges(image: &PixelBuffer, out: &mut FeatureGrid) {
    debug_assert_eq!((out.width, out.height), (image.width, image.height));

    let width = image.width as usize;
    let height = image.height as usize;
    let lumas: Vec<f64> = image.rgb_chunks().map(|c| luma([c[0], c[1], c[2]])).collect();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if x == 0 || x + 1 >= width || y == 0 || y + 1 >= height {
                out.values[idx] = 0;
                continue;
            }

            let lightness = lumas[idx] * 4.0
                - lumas[idx - width]
                - lumas[idx - 1]
                - lumas[idx + 1]
                - lumas[idx + width];
            out.values[idx] = clamp_intensity(lightness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(image: &PixelBuffer) -> FeatureGrid {
        let mut grid = FeatureGrid::new(image.width, image.height);
        detect_edges(image, &mut grid);
        grid
    }

    #[test]
    fn test_flat_image_has_no_detail() {
        let img = PixelBuffer::filled(8, 8, [200, 10, 90]);
        assert_eq!(run(&img).max_value(), 0);
    }

    #[test]
    fn test_bright_dot_on_dark() {
        let mut img = PixelBuffer::filled(5, 5, [0, 0, 0]);
        img.set_pixel(2, 2, [0, 50, 0]);
        let grid = run(&img);

        // 4 * (0.7152 * 50) = 143.04 -> 143
        assert_eq!(grid.get(2, 2), 143);
        // Neighbours see a negative response, clamped to zero
        assert_eq!(grid.get(1, 2), 0);
        assert_eq!(grid.get(2, 1), 0);
    }

    #[test]
    fn test_response_saturates_at_255() {
        let mut img = PixelBuffer::filled(5, 5, [0, 0, 0]);
        img.set_pixel(2, 2, [255, 255, 255]);
        assert_eq!(run(&img).get(2, 2), 255);
    }

    #[test]
    fn test_border_is_zero() {
        let mut img = PixelBuffer::filled(6, 4, [0, 0, 0]);
        for x in 0..6 {
            img.set_pixel(x, 0, [255, 255, 255]);
            img.set_pixel(x, 3, [255, 255, 255]);
        }
        for y in 0..4 {
            img.set_pixel(0, y, [255, 255, 255]);
            img.set_pixel(5, y, [255, 255, 255]);
        }
        let grid = run(&img);

        for x in 0..6 {
            assert_eq!(grid.get(x, 0), 0);
            assert_eq!(grid.get(x, 3), 0);
        }
        for y in 0..4 {
            assert_eq!(grid.get(0, y), 0);
            assert_eq!(grid.get(5, y), 0);
        }
    }

    #[test]
    fn test_tiny_images_are_all_border() {
        for (w, h) in [(1, 1), (2, 2), (2, 7), (7, 2)] {
            let mut img = PixelBuffer::filled(w, h, [0, 0, 0]);
            img.set_pixel(w - 1, h - 1, [255, 255, 255]);
            assert_eq!(run(&img).max_value(), 0);
        }
    }
}
