//! Face-union rectangle and its mapping into analysis space.

use crate::geometry::Rect;

/// Smallest rectangle enclosing every face, or `None` for an empty list.
///
/// This is the true bounding box on both axes. Some older crop tools only
/// ever took the bottom edge from the first face; results here can differ
/// from theirs when faces are stacked vertically.
pub fn face_union(faces: &[Rect]) -> Option<Rect> {
    faces.iter().copied().reduce(|acc, face| acc.union(&face))
}

/// Scale `region` proportionally from a `from` sized image to a `to` sized
/// one, truncating toward zero.
///
/// Returns `None` when the source dimensions are zero.
pub fn scale_region(region: &Rect, from: (u32, u32), to: (u32, u32)) -> Option<Rect> {
    let (from_w, from_h) = (from.0 as i64, from.1 as i64);
    let (to_w, to_h) = (to.0 as i64, to.1 as i64);
    if from_w == 0 || from_h == 0 {
        return None;
    }

    let sx = |v: i32| (to_w * v as i64 / from_w) as i32;
    let sy = |v: i32| (to_h * v as i64 / from_h) as i32;
    Some(Rect {
        min_x: sx(region.min_x),
        min_y: sy(region.min_y),
        max_x: sx(region.max_x),
        max_y: sy(region.max_y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_union() {
        assert_eq!(face_union(&[]), None);
    }

    #[test]
    fn test_single_face() {
        let face = Rect::new(10, 20, 30, 40);
        assert_eq!(face_union(&[face]), Some(face));
    }

    #[test]
    fn test_union_tracks_every_edge() {
        let faces = [
            Rect::new(50, 10, 80, 40),
            Rect::new(10, 30, 40, 90),
            Rect::new(60, 60, 70, 120),
        ];
        assert_eq!(face_union(&faces), Some(Rect::new(10, 10, 80, 120)));
    }

    #[test]
    fn test_union_bottom_edge_from_later_face() {
        // Second face is lower but narrower than the first
        let faces = [Rect::new(0, 0, 100, 50), Rect::new(10, 40, 20, 200)];
        assert_eq!(face_union(&faces).map(|r| r.max_y), Some(200));
    }

    #[test]
    fn test_scale_region_halves() {
        let r = Rect::new(10, 21, 101, 60);
        let scaled = scale_region(&r, (200, 100), (100, 50)).unwrap();
        assert_eq!(scaled, Rect::new(5, 10, 50, 30));
    }

    #[test]
    fn test_scale_region_identity() {
        let r = Rect::new(3, 4, 50, 60);
        assert_eq!(scale_region(&r, (100, 100), (100, 100)), Some(r));
    }

    #[test]
    fn test_scale_region_truncates_negative_toward_zero() {
        let r = Rect::new(-3, -3, 10, 10);
        let scaled = scale_region(&r, (10, 10), (5, 5)).unwrap();
        // -15 / 10 = -1.5 -> -1
        assert_eq!(scaled.min_x, -1);
        assert_eq!(scaled.min_y, -1);
    }

    #[test]
    fn test_scale_region_zero_source() {
        assert_eq!(scale_region(&Rect::new(0, 0, 1, 1), (0, 10), (5, 5)), None);
    }
}
