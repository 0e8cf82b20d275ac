//! Sliding-window candidate enumeration.

use crate::geometry::Rect;
use crate::settings::CropSettings;

/// Parameters of one candidate search, in analysis-space pixels.
///
/// Windows are generated scale by scale (largest first), then row by row,
/// then column by column. That order is also the tie-break order used when
/// two candidates score exactly the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateGrid {
    /// Width of the buffer being searched.
    pub width: u32,
    /// Height of the buffer being searched.
    pub height: u32,
    /// Window width at scale 1.0.
    pub crop_width: f64,
    /// Window height at scale 1.0.
    pub crop_height: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub scale_step: f64,
    /// Sliding stride in pixels.
    pub step: u32,
}

impl CandidateGrid {
    /// Build a grid for a buffer and a base window size.
    ///
    /// A zero `crop_width` or `crop_height` is replaced by the buffer's
    /// smaller dimension.
    pub fn new(
        width: u32,
        height: u32,
        crop_width: f64,
        crop_height: f64,
        min_scale: f64,
        settings: &CropSettings,
    ) -> Self {
        let min_dimension = width.min(height) as f64;
        Self {
            width,
            height,
            crop_width: if crop_width != 0.0 { crop_width } else { min_dimension },
            crop_height: if crop_height != 0.0 { crop_height } else { min_dimension },
            min_scale,
            max_scale: settings.max_scale,
            scale_step: settings.scale_step,
            step: settings.step,
        }
    }

    /// Scales visited, from `max_scale` down to `min_scale` inclusive.
    ///
    /// Successive scales are produced by repeated subtraction, so whether the
    /// lower bound itself is reached is subject to floating-point rounding.
    pub fn scales(&self) -> impl Iterator<Item = f64> {
        let (max, min, step) = (self.max_scale, self.min_scale, self.scale_step);
        let limit = if step > 0.0 { usize::MAX } else { 1 };
        std::iter::successors(Some(max), move |s| Some(s - step))
            .take(limit)
            .take_while(move |&s| s >= min && s > 0.0)
    }

    /// Lazily enumerate every window that fits inside the buffer.
    pub fn candidates(&self) -> impl Iterator<Item = Rect> {
        let grid = *self;
        let step = grid.step.max(1) as usize;
        let (buf_w, buf_h) = (grid.width as f64, grid.height as f64);

        self.scales().flat_map(move |scale| {
            let w = grid.crop_width * scale;
            let h = grid.crop_height * scale;
            let (win_w, win_h) = (w as u32, h as u32);
            let usable = win_w > 0 && win_h > 0;

            (0u32..)
                .step_by(step)
                .take_while(move |&y| usable && y as f64 + h <= buf_h)
                .flat_map(move |y| {
                    (0u32..)
                        .step_by(step)
                        .take_while(move |&x| x as f64 + w <= buf_w)
                        .map(move |x| Rect::from_origin_size(x as i32, y as i32, win_w, win_h))
                })
        })
    }
}
