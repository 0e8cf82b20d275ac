//! Diagnostics hooks.
//!
//! An [`AnalysisObserver`] is called at fixed checkpoints of the pipeline.
//! Observers only ever receive shared references, so they cannot change the
//! outcome of an analysis. [`DebugImages`] is a ready-made observer that keeps
//! rendered intermediate images in memory for human inspection.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::buffer::PixelBuffer;
use crate::crop::Crop;
use crate::features::{FeatureGrid, FeatureMap};
use crate::geometry::Rect;

/// Checkpoint callbacks. Every method defaults to doing nothing.
pub trait AnalysisObserver {
    /// The buffer analysis will run on, and the factor applied to reach it.
    fn on_prescaled(&mut self, _image: &PixelBuffer, _factor: f64) {}

    /// Feature extraction finished.
    fn on_features(&mut self, _features: &FeatureMap) {}

    /// Every candidate has been scored, in generation order.
    fn on_scored(&mut self, _crops: &[Crop]) {}

    /// The winner (in analysis space) has been chosen.
    fn on_selected(&mut self, _features: &FeatureMap, _winner: Option<&Crop>) {}
}

/// Observer that ignores every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}

/// Collects debug renderings of one analysis.
#[derive(Debug, Clone, Default)]
pub struct DebugImages {
    pub prescaled: Option<RgbImage>,
    pub prescale_factor: Option<f64>,
    pub detail: Option<GrayImage>,
    pub skin: Option<GrayImage>,
    pub saturation: Option<GrayImage>,
    /// Feature grids packed into one image: R = skin, G = detail,
    /// B = saturation.
    pub composite: Option<RgbImage>,
    /// Composite with everything outside the winner dimmed and the winner
    /// outlined in white.
    pub overlay: Option<RgbImage>,
    pub candidates_scored: usize,
}

impl DebugImages {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisObserver for DebugImages {
    fn on_prescaled(&mut self, image: &PixelBuffer, factor: f64) {
        self.prescaled = image.to_rgb_image();
        self.prescale_factor = Some(factor);
    }

    fn on_features(&mut self, features: &FeatureMap) {
        self.detail = Some(render_grid(&features.detail));
        self.skin = Some(render_grid(&features.skin));
        self.saturation = Some(render_grid(&features.saturation));
        self.composite = Some(render_features(features));
    }

    fn on_scored(&mut self, crops: &[Crop]) {
        self.candidates_scored = crops.len();
    }

    fn on_selected(&mut self, features: &FeatureMap, winner: Option<&Crop>) {
        self.overlay = Some(render_overlay(features, winner.map(|c| &c.rect)));
    }
}

/// Render one feature grid as a grayscale image.
pub fn render_grid(grid: &FeatureGrid) -> GrayImage {
    GrayImage::from_fn(grid.width, grid.height, |x, y| Luma([grid.get(x, y)]))
}

/// Pack the three grids into the color channels of one image.
pub fn render_features(features: &FeatureMap) -> RgbImage {
    RgbImage::from_fn(features.width, features.height, |x, y| {
        let (detail, skin, saturation) = features.sample(x, y);
        Rgb([skin, detail, saturation])
    })
}

/// Feature composite with the winning rectangle highlighted.
pub fn render_overlay(features: &FeatureMap, winner: Option<&Rect>) -> RgbImage {
    let mut out = render_features(features);
    let Some(rect) = winner.filter(|r| !r.is_empty()) else {
        return out;
    };

    for (x, y, px) in out.enumerate_pixels_mut() {
        let (xi, yi) = (x as i32, y as i32);
        if !rect.contains_point(xi, yi) {
            px.0 = px.0.map(|c| c / 2);
            continue;
        }
        let on_border = xi == rect.min_x
            || xi == rect.max_x - 1
            || yi == rect.min_y
            || yi == rect.max_y - 1;
        if on_border {
            *px = Rgb([255, 255, 255]);
        }
    }
    out
}
