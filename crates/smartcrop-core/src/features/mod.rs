//! Per-pixel feature extraction.
//!
//! Three independent passes read the source buffer and each fill one grid of
//! a [`FeatureMap`]:
//!
//! - **Detail**: a Laplacian over luma, highlighting edges and texture
//! - **Skin**: closeness of the pixel's chroma direction to a skin tone
//! - **Saturation**: HSL saturation within a mid-luma band
//!
//! No pass reads another's output, so the order they run in does not matter.
//! Every grid stores intensities in the range 0 to 255.

mod edge;
mod saturation;
mod skin;

pub use edge::detect_edges;
pub use saturation::{detect_saturation, hsl_saturation};
pub use skin::{detect_skin, skin_likelihood};

use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::settings::CropSettings;

/// A single-channel intensity grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGrid {
    pub width: u32,
    pub height: u32,
    pub values: Vec<u8>,
}

impl FeatureGrid {
    /// Create a zero-filled grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.values[y as usize * self.width as usize + x as usize] = value;
    }

    /// Largest intensity in the grid (0 for an empty grid).
    pub fn max_value(&self) -> u8 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// The three feature grids for one analysis, all with the dimensions of the
/// (possibly prescaled) source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMap {
    pub width: u32,
    pub height: u32,
    pub detail: FeatureGrid,
    pub skin: FeatureGrid,
    pub saturation: FeatureGrid,
}

impl FeatureMap {
    /// Create a map with all grids zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            detail: FeatureGrid::new(width, height),
            skin: FeatureGrid::new(width, height),
            saturation: FeatureGrid::new(width, height),
        }
    }

    /// Feature intensities at `(x, y)` as `(detail, skin, saturation)`.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = y as usize * self.width as usize + x as usize;
        (
            self.detail.values[idx],
            self.skin.values[idx],
            self.saturation.values[idx],
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Run all three passes over `image`.
pub fn extract_features(image: &PixelBuffer, settings: &CropSettings) -> FeatureMap {
    let mut features = FeatureMap::new(image.width, image.height);

    let started = Instant::now();
    detect_edges(image, &mut features.detail);
    tracing::debug!(elapsed_ms = elapsed_ms(started), "edge detection finished");

    let started = Instant::now();
    detect_skin(image, settings, &mut features.skin);
    tracing::debug!(elapsed_ms = elapsed_ms(started), "skin detection finished");

    let started = Instant::now();
    detect_saturation(image, settings, &mut features.saturation);
    tracing::debug!(
        elapsed_ms = elapsed_ms(started),
        "saturation detection finished"
    );

    features
}

/// Clamp a feature response into the storable 0 to 255 range.
///
/// Fractions are truncated, not rounded.
#[inline]
pub(crate) fn clamp_intensity(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
