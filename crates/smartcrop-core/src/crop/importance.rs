//! Per-pixel importance relative to a candidate window.

use crate::geometry::Rect;
use crate::settings::CropSettings;

/// Periodic bump peaking where `v ≡ 1/3 (mod 2)`.
///
/// Applied to the normalized distance from the window center (0 at the
/// center, 1 at the edge), it rewards features that sit on the
/// rule-of-thirds lines. The bump is non-zero only within 1/8 of the peak.
#[inline]
pub fn thirds(v: f64) -> f64 {
    let x = (((v - 1.0 / 3.0 + 1.0) % 2.0) * 0.5 - 0.5) * 16.0;
    (1.0 - x * x).max(0.0)
}

/// Signed weight of pixel `(x, y)` for window `rect`.
///
/// Samples outside the window get `outside_importance`. Inside, weight falls
/// off with distance from the center, drops sharply within `edge_radius` of
/// the window's own edges and, with `rule_of_thirds`, is boosted on the
/// thirds lines.
pub fn importance(rect: &Rect, x: i32, y: i32, settings: &CropSettings) -> f64 {
    if !rect.contains_point(x, y) {
        return settings.outside_importance;
    }

    let xf = (x - rect.min_x) as f64 / rect.width() as f64;
    let yf = (y - rect.min_y) as f64 / rect.height() as f64;

    let px = (0.5 - xf).abs() * 2.0;
    let py = (0.5 - yf).abs() * 2.0;

    let dx = (px - 1.0 + settings.edge_radius).max(0.0);
    let dy = (py - 1.0 + settings.edge_radius).max(0.0);
    let d = (dx * dx + dy * dy) * settings.edge_weight;

    let mut s = 1.41 - (px * px + py * py).sqrt();
    if settings.rule_of_thirds {
        // The boost feeds back into `s` before the edge term is added.
        s += (s + d + 0.5).max(0.0) * 1.2 * (thirds(px) + thirds(py));
    }

    s + d
}
