//! Candidate generation, scoring and selection.
//!
//! # Pipeline
//!
//! 1. [`CandidateGrid`] enumerates windows of the target aspect ratio over a
//!    range of scales
//! 2. [`score`] weighs the feature map through the [`importance`] field of
//!    each window
//! 3. [`select`] keeps the best window, optionally one that contains the
//!    face-union rectangle
//!
//! All coordinates here are in analysis space, i.e. the prescaled buffer.

mod candidates;
mod faces;
mod importance;
mod score;
mod select;

pub use candidates::CandidateGrid;
pub use faces::{face_union, scale_region};
pub use importance::{importance, thirds};
pub use score::{score, score_candidates, Score};
pub use select::{select, select_best, select_best_containing, Selection};

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::settings::CropSettings;

/// A candidate window together with its feature score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub rect: Rect,
    pub score: Score,
}

impl Crop {
    /// Area-normalized ranking score used to compare candidates.
    pub fn total_score(&self, settings: &CropSettings) -> f64 {
        self.score.total(&self.rect, settings)
    }
}
