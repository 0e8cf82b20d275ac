//! Feature scoring of candidate windows.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::importance::importance;
use super::Crop;
use crate::features::{elapsed_ms, FeatureMap};
use crate::geometry::Rect;
use crate::settings::CropSettings;

/// Importance-weighted feature sums for one window.
///
/// The sums are raw: they grow with the number of samples and are only
/// normalized by window area in [`Score::total`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub detail: f64,
    pub skin: f64,
    pub saturation: f64,
}

impl Score {
    /// Weighted ranking score divided by the window area.
    pub fn total(&self, rect: &Rect, settings: &CropSettings) -> f64 {
        (self.detail * settings.detail_weight
            + self.skin * settings.skin_weight
            + self.saturation * settings.saturation_weight)
            / rect.area() as f64
    }
}

/// Score `rect` against the whole feature map.
///
/// Every `score_down_sample`-th pixel on both axes is visited, including
/// those outside `rect`, which contribute with negative importance.
pub fn score(features: &FeatureMap, rect: &Rect, settings: &CropSettings) -> Score {
    let stride = settings.score_down_sample.max(1);
    let mut score = Score::default();

    if features.width < stride || features.height < stride {
        return score;
    }

    for y in (0..=features.height - stride).step_by(stride as usize) {
        for x in (0..=features.width - stride).step_by(stride as usize) {
            let (detail, skin, saturation) = features.sample(x, y);

            let imp = importance(rect, x as i32, y as i32, settings);
            let det = detail as f64 / 255.0;

            score.skin += skin as f64 / 255.0 * (det + settings.skin_bias) * imp;
            score.detail += det * imp;
            score.saturation += saturation as f64 / 255.0 * (det + settings.saturation_bias) * imp;
        }
    }

    score
}

/// Score every candidate, preserving input order.
///
/// With the `rayon` feature the work is spread over the global pool; the
/// collected output is in the same order either way, so selection is
/// unaffected by how the work was partitioned.
pub fn score_candidates(
    features: &FeatureMap,
    candidates: &[Rect],
    settings: &CropSettings,
) -> Vec<Crop> {
    let started = Instant::now();
    let score_one = |rect: &Rect| Crop {
        rect: *rect,
        score: score(features, rect, settings),
    };

    #[cfg(feature = "rayon")]
    let crops: Vec<Crop> = {
        use rayon::prelude::*;
        candidates.par_iter().map(score_one).collect()
    };
    #[cfg(not(feature = "rayon"))]
    let crops: Vec<Crop> = candidates.iter().map(score_one).collect();

    tracing::debug!(
        candidates = crops.len(),
        elapsed_ms = elapsed_ms(started),
        "candidate scoring finished"
    );
    crops
}
