//! End-to-end crop analysis.
//!
//! The pipeline for one call:
//!
//! 1. Plan: work out the prescale factor and the crop size in analysis space.
//! 2. Prescale the source through the [`Resizer`] (never upscaling).
//! 3. Extract the feature grids.
//! 4. Enumerate and score sliding-window candidates.
//! 5. Select the winner, honoring the face union when one is given.
//! 6. Map the winner back to source coordinates.

use std::borrow::Cow;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::crop::{
    face_union, scale_region, score_candidates, select, CandidateGrid, Crop, Selection,
};
use crate::error::CropError;
use crate::features::{elapsed_ms, extract_features};
use crate::geometry::{round_toward_zero, Rect};
use crate::observer::{AnalysisObserver, NoopObserver};
use crate::resize::{ImageResizer, Resizer};
use crate::settings::CropSettings;

/// Per-call geometry derived from the source and target sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisPlan {
    pub source_width: u32,
    pub source_height: u32,
    /// How many times the target fits in the source along the tighter axis.
    pub scale: f64,
    /// Factor applied to the source before analysis, at most 1.0.
    pub prescale_factor: f64,
    /// Width requested from the resizer. Equal to `source_width` when no
    /// prescaling happens.
    pub analysis_width: u32,
    /// Crop size at scale 1.0, in analysis space.
    pub crop_width: f64,
    pub crop_height: f64,
    /// Smallest window scale worth trying.
    pub min_scale: f64,
}

impl AnalysisPlan {
    /// Plan an analysis of a `source_width × source_height` image for a
    /// `target_width × target_height` output.
    ///
    /// Returns [`CropError::InvalidDimensions`] if both target dimensions are
    /// zero. A single zero dimension is allowed and yields a square crop.
    pub fn new(
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
        settings: &CropSettings,
    ) -> Result<Self, CropError> {
        if target_width == 0 && target_height == 0 {
            return Err(CropError::InvalidDimensions);
        }

        let (src_w, src_h) = (source_width as f64, source_height as f64);
        // x / 0 is +inf and drops out of the min
        let scale = (src_w / target_width as f64).min(src_h / target_height as f64);

        let mut prescale_factor = 1.0;
        if settings.prescale {
            let f = settings.prescale_min / src_w.min(src_h);
            if f < 1.0 {
                prescale_factor = f;
            }
        }

        let analysis_width = if prescale_factor < 1.0 {
            round_toward_zero(src_w * prescale_factor) as u32
        } else {
            source_width
        };

        let crop_width = round_toward_zero(target_width as f64 * scale * prescale_factor);
        let crop_height = round_toward_zero(target_height as f64 * scale * prescale_factor);
        let min_scale = settings.max_scale.min((1.0 / scale).max(settings.min_scale));

        Ok(Self {
            source_width,
            source_height,
            scale,
            prescale_factor,
            analysis_width,
            crop_width,
            crop_height,
            min_scale,
        })
    }

    /// Whether the source is reduced before analysis.
    pub fn is_prescaled(&self) -> bool {
        self.prescale_factor < 1.0
    }

    /// Map an analysis-space rectangle back into source coordinates.
    pub fn to_source(&self, rect: Rect) -> Rect {
        let factor = self.prescale_factor;
        rect.map_coords(|v| v / factor)
            .canonical()
            .clamp_to(self.source_width, self.source_height)
    }
}

/// Detailed outcome of [`Analyzer::analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropAnalysis {
    /// Winner in source coordinates. Zero-area if nothing could be scored.
    pub rect: Rect,
    /// Winner in analysis space, with its score.
    pub crop: Option<Crop>,
    pub prescale_factor: f64,
    pub candidates_evaluated: usize,
    pub selection: Selection,
}

/// Content-aware crop finder.
///
/// Holds only configuration, so one analyzer can serve any number of calls,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Analyzer<R = ImageResizer> {
    settings: CropSettings,
    resizer: R,
}

impl Analyzer {
    /// Analyzer with the default `image`-backed resizer.
    pub fn new(settings: CropSettings) -> Self {
        Self::with_resizer(settings, ImageResizer::default())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(CropSettings::default())
    }
}

impl<R: Resizer> Analyzer<R> {
    pub fn with_resizer(settings: CropSettings, resizer: R) -> Self {
        Self { settings, resizer }
    }

    pub fn settings(&self) -> &CropSettings {
        &self.settings
    }

    /// Best crop with the aspect ratio of `target_width × target_height`.
    pub fn find_best_crop(
        &self,
        image: &PixelBuffer,
        target_width: u32,
        target_height: u32,
    ) -> Result<Rect, CropError> {
        self.find_best_crop_with_faces(image, target_width, target_height, &[])
    }

    /// Best crop that contains every rectangle in `faces`, if any such crop
    /// exists. Otherwise the unconstrained best crop.
    pub fn find_best_crop_with_faces(
        &self,
        image: &PixelBuffer,
        target_width: u32,
        target_height: u32,
        faces: &[Rect],
    ) -> Result<Rect, CropError> {
        let analysis =
            self.analyze(image, target_width, target_height, faces, &mut NoopObserver)?;
        Ok(analysis.rect)
    }

    /// Run the full pipeline, reporting each stage to `observer`.
    pub fn analyze(
        &self,
        image: &PixelBuffer,
        target_width: u32,
        target_height: u32,
        faces: &[Rect],
        observer: &mut dyn AnalysisObserver,
    ) -> Result<CropAnalysis, CropError> {
        let started = Instant::now();
        let settings = self.settings();
        let plan = AnalysisPlan::new(
            image.width,
            image.height,
            target_width,
            target_height,
            settings,
        )?;

        let buffer: Cow<'_, PixelBuffer> = if plan.is_prescaled() {
            let resize_started = Instant::now();
            let scaled = self.resizer.scale_down(image, plan.analysis_width);
            tracing::debug!(
                from_width = image.width,
                from_height = image.height,
                to_width = scaled.width,
                to_height = scaled.height,
                factor = plan.prescale_factor,
                elapsed_ms = elapsed_ms(resize_started),
                "prescaled source"
            );
            Cow::Owned(scaled)
        } else {
            Cow::Borrowed(image)
        };
        observer.on_prescaled(&buffer, plan.prescale_factor);

        let features = extract_features(&buffer, settings);
        observer.on_features(&features);

        let grid = CandidateGrid::new(
            buffer.width,
            buffer.height,
            plan.crop_width,
            plan.crop_height,
            plan.min_scale,
            settings,
        );
        let candidates: Vec<Rect> = grid.candidates().collect();
        let crops = score_candidates(&features, &candidates, settings);
        observer.on_scored(&crops);

        let face_region = face_union(faces).and_then(|region| {
            scale_region(
                &region,
                (image.width, image.height),
                (buffer.width, buffer.height),
            )
        });
        let (winner, selection) = select(&crops, face_region.as_ref(), settings);
        observer.on_selected(&features, winner.as_ref());

        let rect = winner.map_or_else(Rect::default, |crop| plan.to_source(crop.rect));

        tracing::debug!(
            width = image.width,
            height = image.height,
            target_width,
            target_height,
            candidates = crops.len(),
            ?selection,
            ?rect,
            elapsed_ms = elapsed_ms(started),
            "crop analysis finished"
        );

        Ok(CropAnalysis {
            rect,
            crop: winner,
            prescale_factor: plan.prescale_factor,
            candidates_evaluated: crops.len(),
            selection,
        })
    }
}

/// [`Analyzer::find_best_crop`] with default settings.
pub fn find_best_crop(
    image: &PixelBuffer,
    target_width: u32,
    target_height: u32,
) -> Result<Rect, CropError> {
    Analyzer::new(CropSettings::default()).find_best_crop(image, target_width, target_height)
}

/// [`Analyzer::find_best_crop_with_faces`] with default settings.
pub fn find_best_crop_with_faces(
    image: &PixelBuffer,
    target_width: u32,
    target_height: u32,
    faces: &[Rect],
) -> Result<Rect, CropError> {
    Analyzer::new(CropSettings::default()).find_best_crop_with_faces(
        image,
        target_width,
        target_height,
        faces,
    )
}
