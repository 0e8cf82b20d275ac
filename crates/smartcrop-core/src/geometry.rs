//! Integer rectangles in pixel coordinates.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Bounds are half-open: `[min_x, max_x) × [min_y, max_y)`
//! - Coordinates are signed so detector boxes that stick out of the frame
//!   can be represented without clamping

use serde::{Deserialize, Serialize};

/// A half-open integer rectangle.
///
/// `Rect::default()` is the all-zero rectangle. The analyzer returns it when
/// no candidate could be scored, and callers should read a zero-area result
/// as "no confident crop found".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    /// Create a rectangle from its bounds.
    ///
    /// A degenerate rectangle (`min >= max` on either axis) is a programming
    /// error and trips a debug assertion.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        debug_assert!(
            min_x < max_x && min_y < max_y,
            "degenerate rectangle ({}, {}) - ({}, {})",
            min_x,
            min_y,
            max_x,
            max_y
        );
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(x, y, x + width as i32, y + height as i32)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Area in pixels, zero for empty or inverted rectangles.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        self.width() as i64 * self.height() as i64
    }

    /// True if the rectangle contains no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// True if `(x, y)` lies inside the half-open bounds.
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// True if `self` lies entirely within `outer`.
    ///
    /// An empty rectangle lies within every rectangle.
    pub fn is_within(&self, outer: &Rect) -> bool {
        if self.is_empty() {
            return true;
        }
        outer.min_x <= self.min_x
            && self.max_x <= outer.max_x
            && outer.min_y <= self.min_y
            && self.max_y <= outer.max_y
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Swap coordinates where needed so that `min <= max` on both axes.
    pub fn canonical(self) -> Rect {
        Rect {
            min_x: self.min_x.min(self.max_x),
            min_y: self.min_y.min(self.max_y),
            max_x: self.min_x.max(self.max_x),
            max_y: self.min_y.max(self.max_y),
        }
    }

    /// Clamp all four coordinates into `[0, width] × [0, height]`.
    pub fn clamp_to(self, width: u32, height: u32) -> Rect {
        let w = width.min(i32::MAX as u32) as i32;
        let h = height.min(i32::MAX as u32) as i32;
        Rect {
            min_x: self.min_x.clamp(0, w),
            min_y: self.min_y.clamp(0, h),
            max_x: self.max_x.clamp(0, w),
            max_y: self.max_y.clamp(0, h),
        }
    }

    /// Map every coordinate through `f`, rounding the result toward zero.
    pub(crate) fn map_coords(self, f: impl Fn(f64) -> f64) -> Rect {
        let map = |v: i32| round_toward_zero(f(v as f64)) as i32;
        Rect {
            min_x: map(self.min_x),
            min_y: map(self.min_y),
            max_x: map(self.max_x),
            max_y: map(self.max_y),
        }
    }

    /// Center point in floating-point pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) as f64 / 2.0,
            (self.min_y + self.max_y) as f64 / 2.0,
        )
    }
}

/// Round toward zero: ceiling for negative values, floor otherwise.
#[inline]
pub fn round_toward_zero(x: f64) -> f64 {
    if x < 0.0 {
        x.ceil()
    } else {
        x.floor()
    }
}
