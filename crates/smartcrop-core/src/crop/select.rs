//! Picking the winning candidate.

use serde::{Deserialize, Serialize};

use super::Crop;
use crate::geometry::Rect;
use crate::settings::CropSettings;

/// How the winner was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No face constraint was requested.
    Unconstrained,
    /// The winner contains the face-union rectangle.
    FaceConstrained,
    /// Faces were supplied but no candidate could contain them; the
    /// unconstrained winner was used instead.
    FaceFallback,
}

/// Highest-ranking crop among those accepted by `eligible`.
///
/// Ties go to the earliest crop in `crops`.
fn best_by<'a>(
    crops: &'a [Crop],
    settings: &CropSettings,
    eligible: impl Fn(&Crop) -> bool,
) -> Option<&'a Crop> {
    let mut top: Option<(&Crop, f64)> = None;
    for crop in crops.iter().filter(|c| eligible(c)) {
        let total = crop.total_score(settings);
        tracing::trace!(rect = ?crop.rect, total, "candidate");
        match top {
            Some((_, best)) if total <= best => {}
            // NaN never beats a real score
            _ if total.is_nan() => {}
            _ => top = Some((crop, total)),
        }
    }
    top.map(|(crop, _)| crop)
}

/// Highest-ranking crop, or `None` if `crops` is empty.
pub fn select_best<'a>(crops: &'a [Crop], settings: &CropSettings) -> Option<&'a Crop> {
    best_by(crops, settings, |_| true)
}

/// Highest-ranking crop whose rectangle contains `region`.
pub fn select_best_containing<'a>(
    crops: &'a [Crop],
    region: &Rect,
    settings: &CropSettings,
) -> Option<&'a Crop> {
    best_by(crops, settings, |crop| region.is_within(&crop.rect))
}

/// Select the winner, honoring `face_region` when one is given.
///
/// When no crop contains the face region the unconstrained winner is
/// returned and the selection is reported as [`Selection::FaceFallback`].
pub fn select(
    crops: &[Crop],
    face_region: Option<&Rect>,
    settings: &CropSettings,
) -> (Option<Crop>, Selection) {
    let Some(region) = face_region else {
        return (select_best(crops, settings).copied(), Selection::Unconstrained);
    };

    match select_best_containing(crops, region, settings) {
        Some(crop) => (Some(*crop), Selection::FaceConstrained),
        None => {
            tracing::debug!(face_region = ?region, "no candidate contains the faces; falling back");
            (select_best(crops, settings).copied(), Selection::FaceFallback)
        }
    }
}
